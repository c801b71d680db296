use leptos::prelude::*;

/// Which informational text the header's info modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTopic {
    About,
    Advertise,
}

impl InfoTopic {
    pub fn title(&self) -> &'static str {
        match self {
            InfoTopic::About => "About",
            InfoTopic::Advertise => "Advertise with us",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub admin_open: RwSignal<bool>,
    pub info: RwSignal<Option<InfoTopic>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            admin_open: RwSignal::new(false),
            info: RwSignal::new(None),
        }
    }

    pub fn open_admin(&self) {
        self.admin_open.set(true);
    }

    pub fn show_info(&self, topic: InfoTopic) {
        self.info.set(Some(topic));
    }

    pub fn close_info(&self) {
        self.info.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
