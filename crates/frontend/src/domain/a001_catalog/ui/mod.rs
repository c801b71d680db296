//! Catalog screens: home (search + categories), program page with the ad
//! gate, ads strip, and the admin editor.

pub mod admin;
pub mod ads;
pub mod home;
pub mod program;
