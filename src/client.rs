use log::{debug, error};
use reqwest::blocking::Client;

use crate::QuestError;

const USER_AGENT: &str = concat!("recipe-quest/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over the recipe service's REST API.
///
/// The API key is supplied by construction and sent as the first query
/// parameter of every request.
pub struct ApiClient {
    client: Client,
    api_key: String,
}

impl ApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, QuestError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Build the complete URL for a request: the endpoint, the API key and
    /// every query parameter. Parameter values are percent-encoded; the key
    /// is sent as issued.
    pub fn build_url(&self, base_url: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}?key={}", base_url, self.api_key);
        for (name, value) in params {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Issue a single GET and return the response body.
    pub fn request(&self, base_url: &str, params: &[(&str, String)]) -> Result<String, QuestError> {
        let url = self.build_url(base_url, params);
        debug!("GET {}", base_url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            error!(
                "Error while making request to server (HTTP code: {})",
                status.as_u16()
            );
            return Err(QuestError::HttpStatus(status.as_u16()));
        }

        let body = response.text()?;
        if body.is_empty() {
            error!("No response body from HTTP request");
            return Err(QuestError::EmptyBody);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').unwrap();
        query
            .split('&')
            .map(|pair| {
                let (name, value) = pair.split_once('=').unwrap();
                (name.to_string(), urlencoding::decode(value).unwrap().into_owned())
            })
            .collect()
    }

    #[test]
    fn test_build_url_encodes_values() {
        let client = ApiClient::new("K").unwrap();
        let url = client.build_url(
            "https://x/y",
            &[
                ("q", "a,b".to_string()),
                ("sort", "r".to_string()),
                ("page", 1.to_string()),
            ],
        );

        assert_eq!(url, "https://x/y?key=K&q=a%2Cb&sort=r&page=1");
        assert!(url.contains("key=K"));
        assert!(!url.contains("a,b"));
    }

    #[test]
    fn test_build_url_round_trips() {
        let client = ApiClient::new("K").unwrap();
        let q = "green onion,2% milk,salt & pepper".to_string();
        let url = client.build_url("https://x/y", &[("q", q.clone()), ("page", "1".to_string())]);

        assert!(!url.contains(' '));
        assert_eq!(
            query_pairs(&url),
            vec![
                ("key".to_string(), "K".to_string()),
                ("q".to_string(), q),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_url_keeps_key_verbatim() {
        let client = ApiClient::new("ab-12.cd").unwrap();
        let url = client.build_url("https://x/get", &[("rId", "35382".to_string())]);
        assert_eq!(url, "https://x/get?key=ab-12.cd&rId=35382");
    }

    #[test]
    fn test_build_url_without_params() {
        let client = ApiClient::new("abc123").unwrap();
        assert_eq!(client.build_url("https://x/get", &[]), "https://x/get?key=abc123");
    }
}
