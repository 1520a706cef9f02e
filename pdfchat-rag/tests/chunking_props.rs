//! Property tests for fixed-size chunking invariants.

use std::collections::HashMap;

use pdfchat_rag::{Chunker, Document, FixedSizeChunker};
use proptest::prelude::*;

fn document(text: &str) -> Document {
    Document {
        id: "doc".to_string(),
        text: text.to_string(),
        metadata: HashMap::new(),
        source_uri: None,
    }
}

/// Text including multi-byte characters, so chunking must respect
/// character boundaries rather than byte offsets.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\näéßç日本語]{0,300}"
}

/// (chunk_size, chunk_overlap) with overlap strictly less than size.
fn arb_params() -> impl Strategy<Value = (usize, usize)> {
    (1usize..60).prop_flat_map(|size| (Just(size), 0..size))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Identical input and parameters always produce identical chunk sequences.
    #[test]
    fn chunking_is_deterministic(text in arb_text(), (size, overlap) in arb_params()) {
        let doc = document(&text);
        let chunker = FixedSizeChunker::new(size, overlap);
        prop_assert_eq!(chunker.chunk(&doc), chunker.chunk(&doc));
    }

    /// The last `overlap` characters of each non-final chunk equal the
    /// first `overlap` characters of its successor.
    #[test]
    fn consecutive_chunks_overlap(text in arb_text(), (size, overlap) in arb_params()) {
        let doc = document(&text);
        let chunks = FixedSizeChunker::new(size, overlap).chunk(&doc);

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].text.chars().collect();
            let next: Vec<char> = pair[1].text.chars().collect();
            let tail: Vec<char> = prev[prev.len() - overlap..].to_vec();
            let head: Vec<char> = next[..overlap.min(next.len())].to_vec();
            prop_assert_eq!(tail, head);
        }
    }

    /// Concatenating all chunks with the overlaps de-duplicated
    /// reconstructs the original text exactly.
    #[test]
    fn chunks_reconstruct_original_text(text in arb_text(), (size, overlap) in arb_params()) {
        let doc = document(&text);
        let chunks = FixedSizeChunker::new(size, overlap).chunk(&doc);

        let mut reconstructed = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                reconstructed.push_str(&chunk.text);
            } else {
                reconstructed.extend(chunk.text.chars().skip(overlap));
            }
        }
        prop_assert_eq!(reconstructed, text);
    }

    /// Every chunk is at most `chunk_size` characters and only the final chunk may be shorter.
    #[test]
    fn chunk_sizes_respect_budget(text in arb_text(), (size, overlap) in arb_params()) {
        let doc = document(&text);
        let chunks = FixedSizeChunker::new(size, overlap).chunk(&doc);

        for (i, chunk) in chunks.iter().enumerate() {
            let len = chunk.text.chars().count();
            prop_assert!(len <= size);
            if i + 1 < chunks.len() {
                prop_assert_eq!(len, size);
            }
        }
    }
}

#[test]
fn empty_input_produces_no_chunks() {
    let chunks = FixedSizeChunker::new(10_000, 1_000).chunk(&document(""));
    assert!(chunks.is_empty());
}

#[test]
fn chunk_ids_and_metadata_carry_the_index() {
    let doc = document(&"a".repeat(25));
    let chunks = FixedSizeChunker::new(10, 2).chunk(&doc);
    assert!(chunks.len() > 1);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.id, format!("doc_{i}"));
        assert_eq!(chunk.metadata.get("chunk_index"), Some(&i.to_string()));
        assert_eq!(chunk.document_id, "doc");
    }
}
