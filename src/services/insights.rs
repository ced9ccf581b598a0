//! AI insights service
//!
//! Generates a short Markdown summary of a period's metrics via the Gemini
//! generateContent REST endpoint. Failures are surfaced as user-facing
//! strings, never as errors: a missing key or a failed request produces an
//! explanatory message in place of the summary. No retry, no caching.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::MonthlyRecord;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for summaries
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Message shown when no API key is configured
pub const KEY_MISSING: &str =
    "API key is missing. Unable to generate AI insights. Set GEMINI_API_KEY and retry.";

/// Message shown when the request fails
pub const UNAVAILABLE: &str = "Unable to generate insights at this time.";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Generate an executive summary for a period.
///
/// Always returns displayable text: either the model's Markdown summary or
/// an explanatory failure string.
pub fn generate_insights(period_label: &str, records: &[MonthlyRecord]) -> String {
    let key = match env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => return KEY_MISSING.to_string(),
    };

    let prompt = build_prompt(period_label, records);
    match request_summary(&key, &prompt) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("[mktdash] Warning: insights request failed: {}", e);
            UNAVAILABLE.to_string()
        }
    }
}

/// Build the summary prompt from the period label and its records.
///
/// Months with no traffic and no activity carry no signal and are dropped
/// from the payload.
pub fn build_prompt(period_label: &str, records: &[MonthlyRecord]) -> String {
    let relevant: Vec<&MonthlyRecord> = records
        .iter()
        .filter(|r| r.traffic > 0 || r.has_activity())
        .collect();
    let data = serde_json::to_string_pretty(&relevant).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Analyze the following marketing data for {period_label}.\n\
         Provide a brief executive summary consisting of:\n\
         1. Three key performance highlights (bullet points).\n\
         2. One strategic recommendation for the next month based on the trends.\n\n\
         Data:\n{data}\n\n\
         Format the output as simple Markdown. Keep it concise and professional."
    )
}

fn request_summary(key: &str, prompt: &str) -> Result<String, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| format!("HTTP client error: {}", e))?;

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        GEMINI_MODEL
    );

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };

    let response = client
        .post(&url)
        .header("x-goog-api-key", key)
        .json(&request)
        .send()
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP status {}", response.status()));
    }

    let body: GenerateResponse = response
        .json()
        .map_err(|e| format!("JSON parse error: {}", e))?;

    body.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| "empty response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dataset;

    #[test]
    fn test_build_prompt_includes_label_and_data() {
        let dataset = Dataset::builtin();
        let prompt = build_prompt("Q3", dataset.records());

        assert!(prompt.contains("marketing data for Q3"));
        assert!(prompt.contains("\"month\": \"Nov\""));
        assert!(prompt.contains("executive summary"));
    }

    #[test]
    fn test_build_prompt_filters_empty_months() {
        let mut records = Dataset::builtin().records().to_vec();
        records[0].traffic = 0;
        records[0].activities.clear();

        let prompt = build_prompt("Q2", &records);
        assert!(!prompt.contains("\"month\": \"July\""));
        assert!(prompt.contains("\"month\": \"August\""));
    }

    #[test]
    fn test_build_prompt_empty_records() {
        let prompt = build_prompt("Q2", &[]);
        assert!(prompt.contains("[]"));
    }

    #[test]
    fn test_response_parsing() {
        let json = r###"{
            "candidates": [
                {"content": {"parts": [{"text": "## Summary\n- up"}]}}
            ]
        }"###;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates[0].content.parts[0].text, "## Summary\n- up");
    }

    #[test]
    fn test_response_parsing_no_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
