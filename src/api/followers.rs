//! Followers Endpoint
//!
//! One-shot fetch of the people-listing API and mapping of its nested
//! payload into `FollowerRecord`s.

use serde::Deserialize;

use super::FetchError;
use crate::config::ApiConfig;
use crate::models::FollowerRecord;

// ========================
// Wire Types
// ========================

#[derive(Deserialize)]
struct PeopleResponse {
    results: Vec<Person>,
}

#[derive(Deserialize)]
struct Person {
    name: PersonName,
    picture: Picture,
    login: Login,
}

#[derive(Deserialize)]
struct PersonName {
    first: String,
    last: String,
}

#[derive(Deserialize)]
struct Picture {
    large: String,
}

#[derive(Deserialize)]
struct Login {
    username: String,
}

impl From<Person> for FollowerRecord {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.name.first,
            last_name: person.name.last,
            avatar_url: person.picture.large,
            username: person.login.username,
        }
    }
}

// ========================
// Requests
// ========================

/// Parse a response body, keeping the API's ordering
pub fn parse_followers(body: &str) -> Result<Vec<FollowerRecord>, FetchError> {
    let response: PeopleResponse = serde_json::from_str(body)?;
    Ok(response.results.into_iter().map(FollowerRecord::from).collect())
}

pub async fn fetch_followers(config: &ApiConfig) -> Result<Vec<FollowerRecord>, FetchError> {
    let url = config.request_url()?;
    log::debug!("GET {url}");

    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_followers(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(first: &str, last: &str, username: &str) -> serde_json::Value {
        json!({
            "gender": "male",
            "name": { "title": "Mr", "first": first, "last": last },
            "picture": {
                "large": format!("https://randomuser.me/api/portraits/men/{username}.jpg"),
                "thumbnail": "ignored"
            },
            "login": { "uuid": "x", "username": username }
        })
    }

    #[test]
    fn test_parse_five_followers_in_order() {
        let body = json!({
            "results": [
                person("Laith", "Harp", "HarpyHarper"),
                person("Ada", "Byron", "countess"),
                person("Alan", "Turing", "enigma"),
                person("Grace", "Hopper", "cobol"),
                person("Ken", "Thompson", "unix"),
            ],
            "info": { "seed": "abc", "results": 5, "page": 1 }
        })
        .to_string();

        let followers = parse_followers(&body).unwrap();

        assert_eq!(followers.len(), 5);
        let usernames: Vec<&str> = followers.iter().map(|f| f.username.as_str()).collect();
        assert_eq!(usernames, ["HarpyHarper", "countess", "enigma", "cobol", "unix"]);
    }

    #[test]
    fn test_parse_maps_nested_fields() {
        let body = json!({ "results": [person("Laith", "Harp", "HarpyHarper")] }).to_string();

        let followers = parse_followers(&body).unwrap();

        assert_eq!(
            followers[0],
            FollowerRecord {
                first_name: "Laith".to_string(),
                last_name: "Harp".to_string(),
                avatar_url: "https://randomuser.me/api/portraits/men/HarpyHarper.jpg".to_string(),
                username: "HarpyHarper".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_results() {
        let followers = parse_followers(r#"{"results": []}"#).unwrap();
        assert!(followers.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert!(matches!(parse_followers("<html>"), Err(FetchError::Decode(_))));
        assert!(matches!(parse_followers(r#"{"data": []}"#), Err(FetchError::Decode(_))));

        let missing_login = json!({
            "results": [{ "name": { "first": "A", "last": "B" }, "picture": { "large": "u" } }]
        })
        .to_string();
        assert!(matches!(parse_followers(&missing_login), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(FetchError::Status(503).to_string(), "server responded with status 503");
    }
}
