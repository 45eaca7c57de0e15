use serde::{Deserialize, Deserializer};

// `?page=abc` is treated like a missing page rather than rejected
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse::<i64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[derive(Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_lenient_i64")]
        page: Option<i64>,
    }

    fn page(query: &str) -> Option<i64> {
        let uri: Uri = format!("/questions?{query}").parse().unwrap();
        Query::<Params>::try_from_uri(&uri).unwrap().0.page
    }

    #[test]
    fn parses_integers() {
        assert_eq!(page("page=3"), Some(3));
        assert_eq!(page("page=-1"), Some(-1));
    }

    #[test]
    fn garbage_and_missing_values_fall_back() {
        assert_eq!(page("page=abc"), None);
        assert_eq!(page("page="), None);
        assert_eq!(page(""), None);
    }
}
