use crate::types::{GenerationResult, RawResponse, Source};

/// Map a raw reply to `{text, sources}`. Never fails.
///
/// Sources come from the first candidate's grounding chunks only. Chunks
/// without a non-empty `web.uri` are dropped; the rest keep backend order.
pub fn normalize_text(raw: &RawResponse) -> GenerationResult {
    GenerationResult {
        text: raw.text().to_string(),
        sources: extract_sources(raw),
    }
}

pub fn extract_sources(raw: &RawResponse) -> Vec<Source> {
    raw.first_candidate()
        .and_then(|c| c.grounding_metadata.as_ref())
        .and_then(|g| g.grounding_chunks.as_ref())
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| chunk.web.as_ref())
                .filter_map(|web| {
                    let uri = web.uri.as_deref().filter(|u| !u.trim().is_empty())?;
                    Some(Source {
                        uri: uri.to_string(),
                        title: web.title.clone(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Candidate, GroundingChunk, GroundingMetadata, WebSource};

    fn grounded(chunks: Vec<GroundingChunk>) -> Candidate {
        Candidate {
            grounding_metadata: Some(GroundingMetadata {
                grounding_chunks: Some(chunks),
            }),
        }
    }

    #[test]
    fn test_text_passes_through() {
        let result = normalize_text(&RawResponse::from_text("Step 1: book the park."));
        assert_eq!(result.text, "Step 1: book the park.");
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_missing_text_is_empty() {
        let result = normalize_text(&RawResponse::default());
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_unusable_uris_dropped_in_order() {
        let raw = RawResponse::from_text("answer").with_candidates(vec![grounded(vec![
            GroundingChunk::web("https://a.example", Some("A")),
            GroundingChunk { web: None },
            GroundingChunk {
                web: Some(WebSource {
                    uri: Some(String::new()),
                    title: Some("empty".into()),
                }),
            },
            GroundingChunk {
                web: Some(WebSource {
                    uri: None,
                    title: Some("none".into()),
                }),
            },
            GroundingChunk::web("https://b.example", None),
        ])]);

        let result = normalize_text(&raw);
        let uris: Vec<&str> = result.sources.iter().map(|s| s.uri.as_str()).collect();
        assert_eq!(uris, vec!["https://a.example", "https://b.example"]);
        assert_eq!(result.sources[0].title.as_deref(), Some("A"));
        assert!(result.sources[1].title.is_none());
    }

    #[test]
    fn test_only_first_candidate_is_read() {
        let raw = RawResponse::from_text("answer").with_candidates(vec![
            Candidate::default(),
            grounded(vec![GroundingChunk::web("https://ignored.example", None)]),
        ]);
        assert!(normalize_text(&raw).sources.is_empty());
    }
}
