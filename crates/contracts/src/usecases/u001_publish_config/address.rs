use thiserror::Error;

const RAW_HOST_PREFIX: &str = "https://gist.githubusercontent.com/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("expected a raw gist URL (https://gist.githubusercontent.com/<owner>/<id>/raw/<file>), got `{0}`")]
    UnsupportedUrl(String),

    #[error("gist id `{0}` is not valid")]
    InvalidGistId(String),

    #[error("file name is missing or not decodable")]
    InvalidFileName,
}

/// Store identifier and file name extracted from a raw document URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistAddress {
    pub gist_id: String,
    pub file_name: String,
}

impl GistAddress {
    /// Accepts `https://gist.githubusercontent.com/<owner>/<gistId>/raw/[<revision>/]<fileName>`.
    /// Query string and fragment are ignored; the file name is percent-decoded.
    pub fn parse(url: &str) -> Result<Self, AddressError> {
        let unsupported = || AddressError::UnsupportedUrl(url.to_string());

        let rest = url.trim().strip_prefix(RAW_HOST_PREFIX).ok_or_else(unsupported)?;
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').collect();

        let (gist_id, file) = match segments.as_slice() {
            [owner, gist_id, "raw", file] if !owner.is_empty() => (*gist_id, *file),
            [owner, gist_id, "raw", revision, file]
                if !owner.is_empty() && !revision.is_empty() =>
            {
                (*gist_id, *file)
            }
            _ => return Err(unsupported()),
        };

        if gist_id.is_empty() || !gist_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AddressError::InvalidGistId(gist_id.to_string()));
        }

        let file_name = urlencoding::decode(file)
            .map_err(|_| AddressError::InvalidFileName)?
            .into_owned();
        if file_name.trim().is_empty() {
            return Err(AddressError::InvalidFileName);
        }

        Ok(Self {
            gist_id: gist_id.to_string(),
            file_name,
        })
    }

    /// Endpoint for the partial update of this gist.
    pub fn update_endpoint(&self, api_base: &str) -> String {
        format!("{}/gists/{}", api_base.trim_end_matches('/'), self.gist_id)
    }
}
