pub const APP_NAME: &str = "Crop Value Calculator";
pub const APP_AUTHOR: &str = "SetScallywag";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

/// User agent sent with remote catalog requests.
pub fn user_agent() -> String {
    format!(
        "{}/{}",
        APP_NAME.to_ascii_lowercase().replace(' ', "-"),
        version_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_is_header_safe() {
        let agent = user_agent();
        assert!(agent.starts_with("crop-value-calculator/"));
        assert!(!agent.contains(' '));
    }
}
