// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A FastA record: the full header line (without the leading '>') and the raw sequence.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    /// The record's ID, i.e. the first whitespace-separated token of the header.
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_first_token() {
        let rec = SeqRecord {
            header: String::from("PA14_00010 PA14 dnaA"),
            sequence: String::from("MSV"),
        };
        assert_eq!(rec.id(), "PA14_00010");
    }

    #[test]
    fn test_id_of_empty_header() {
        let rec = SeqRecord {
            header: String::new(),
            sequence: String::new(),
        };
        assert_eq!(rec.id(), "");
    }
}
