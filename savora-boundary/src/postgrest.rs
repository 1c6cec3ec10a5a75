//! URLs and headers of the PostgREST dialect spoken by the
//! remote table (as served by Supabase).

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const REST_PATH: &str = "rest/v1";

pub const HEADER_API_KEY: &str = "apikey";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_PREFER: &str = "Prefer";

/// Merge rows that collide on the conflict key and
/// don't echo the written rows back.
pub const PREFER_UPSERT: &str = "resolution=merge-duplicates,return=minimal";

pub fn auth_header_value(api_key: &str) -> String {
    format!("Bearer {api_key}")
}

pub fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/{REST_PATH}/{table}", base_url.trim_end_matches('/'))
}

/// All columns of the rows where `column` equals `value`.
pub fn select_eq_url(base_url: &str, table: &str, column: &str, value: &str) -> String {
    let encoded_value = utf8_percent_encode(value, NON_ALPHANUMERIC);
    format!(
        "{}?select=*&{column}=eq.{encoded_value}",
        table_url(base_url, table)
    )
}

pub fn upsert_url(base_url: &str, table: &str, conflict_key: &str) -> String {
    format!("{}?on_conflict={conflict_key}", table_url(base_url, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_by_city() {
        assert_eq!(
            select_eq_url("https://abc.supabase.co/", "restaurants", "city", "Kochi"),
            "https://abc.supabase.co/rest/v1/restaurants?select=*&city=eq.Kochi"
        );
    }

    #[test]
    fn encode_filter_value() {
        assert_eq!(
            select_eq_url("http://localhost:54321", "restaurants", "city", "Pimpri-Chinchwad"),
            "http://localhost:54321/rest/v1/restaurants?select=*&city=eq.Pimpri%2DChinchwad"
        );
    }

    #[test]
    fn upsert_on_name() {
        assert_eq!(
            upsert_url("http://localhost:54321", "restaurants", "name"),
            "http://localhost:54321/rest/v1/restaurants?on_conflict=name"
        );
    }
}
