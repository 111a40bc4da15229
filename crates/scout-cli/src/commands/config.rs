//! `scout config` - print the resolved configuration.

use anyhow::Context;
use scout_config::ScoutConfig;

pub fn handle() -> anyhow::Result<()> {
    let mut config = ScoutConfig::load_with_dotenv().context("failed to load configuration")?;
    redact(&mut config.search.api_key);
    redact(&mut config.weather.api_key);
    let json =
        serde_json::to_string_pretty(&config).context("failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}

fn redact(key: &mut String) {
    if !key.is_empty() {
        *key = "<set>".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keys_are_redacted() {
        let mut key = "sk_live_secret".to_string();
        redact(&mut key);
        assert_eq!(key, "<set>");

        let mut empty = String::new();
        redact(&mut empty);
        assert!(empty.is_empty());
    }
}
