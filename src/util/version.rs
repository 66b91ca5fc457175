pub const APP_NAME: &str = "Grant Waste Calculator";
pub const APP_TITLE: &str = "Visualising the cost of funding science via grant applications";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
pub const FEEDBACK_EMAIL: &str = "david.bann@ucl.ac.uk";

pub fn feedback_href() -> String {
    format!("mailto:{FEEDBACK_EMAIL}")
}

pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}
