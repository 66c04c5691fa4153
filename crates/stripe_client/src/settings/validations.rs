use common_utils::fp_utils::when;

use crate::errors::SettingsError;

impl super::ApiSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        when(url::Url::parse(&self.base_url).is_err(), || {
            Err(SettingsError::InvalidConfigurationValueError(format!(
                "base_url `{}` is not an absolute URL",
                self.base_url
            )))
        })?;

        when(self.timeout == 0, || {
            Err(SettingsError::InvalidConfigurationValueError(
                "timeout must be greater than zero".into(),
            ))
        })?;

        when(
            self.initial_network_retry_delay > self.max_network_retry_delay,
            || {
                Err(SettingsError::InvalidConfigurationValueError(
                    "initial_network_retry_delay may not exceed max_network_retry_delay".into(),
                ))
            },
        )
    }
}

impl super::Proxy {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid_url = [&self.http_url, &self.https_url]
            .into_iter()
            .flatten()
            .find(|proxy_url| url::Url::parse(proxy_url).is_err());

        when(invalid_url.is_some(), || {
            Err(SettingsError::InvalidConfigurationValueError(format!(
                "proxy url `{}` is not an absolute URL",
                invalid_url.map(String::as_str).unwrap_or_default()
            )))
        })
    }
}
