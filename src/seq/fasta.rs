// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::errors::OgError;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<SeqRecord>, OgError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(OgError::at(path))?;
    read_fasta(BufReader::new(file)).map_err(OgError::at(path))
}

// Anything before the first header is ignored; an input without headers yields no records.
// Headers lose trailing whitespace; residue lines lose trailing whitespace and inner spaces.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<SeqRecord>, std::io::Error> {
    let mut result: Vec<SeqRecord> = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for line in reader.lines() {
        let l = line?;
        let l = l.trim_end();
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(rec) = current_record.take() {
                result.push(rec);
            }
            current_record = Some(SeqRecord {
                header: String::from(hdr),
                sequence: String::new(),
            });
        } else if let Some(rec) = current_record.as_mut() {
            // append line to current record's sequence
            rec.sequence.extend(l.chars().filter(|&c| c != ' '));
        }
    }
    if let Some(rec) = current_record {
        result.push(rec);
    }
    Ok(result)
}

/// Writes one record as `>ID\n<sequence>\n`, with the sequence on a single line.
pub fn write_fasta_record<W: Write>(out: &mut W, id: &str, sequence: &str) -> std::io::Result<()> {
    writeln!(out, ">{}", id)?;
    writeln!(out, "{}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_file_1() {
        let path = "tests/data/faa/genome_a.faa";
        let fasta = read_fasta_file(path).expect("Test file not found");
        assert_eq!(fasta.len(), 3);
        assert_eq!(fasta[0].header, "seqA genome_a kinase");
        assert_eq!(fasta[0].sequence, "MKVLAAGIVGLPNVGKSTLFNALT");
        assert_eq!(fasta[0].id(), "seqA");
    }

    #[test]
    fn test_read_fasta_multiline() {
        let input = ">s1 x y\nMKV\nLLA\n\n>s2 x y\nGG\n";
        let fasta = read_fasta(input.as_bytes()).unwrap();
        assert_eq!(fasta.len(), 2);
        assert_eq!(fasta[0].sequence, "MKVLLA");
        assert_eq!(fasta[1].header, "s2 x y");
        assert_eq!(fasta[1].sequence, "GG");
    }

    #[test]
    fn test_read_fasta_keeps_case() {
        let fasta = read_fasta(">s1 a b\nmkvLLa\r\n".as_bytes()).unwrap();
        assert_eq!(fasta[0].sequence, "mkvLLa");
    }

    #[test]
    fn test_read_fasta_trailing_whitespace() {
        let fasta = read_fasta(">s g pep:known description:Foo bar \t\nMKV \nLLA\n".as_bytes()).unwrap();
        assert_eq!(fasta[0].header, "s g pep:known description:Foo bar");
        assert_eq!(fasta[0].sequence, "MKVLLA");
    }

    #[test]
    fn test_read_fasta_inner_spaces() {
        let fasta = read_fasta(">s g d\nMK VL A\n  GG\n".as_bytes()).unwrap();
        assert_eq!(fasta[0].sequence, "MKVLAGG");
    }

    #[test]
    fn test_read_fasta_empty() {
        let fasta = read_fasta("".as_bytes()).unwrap();
        assert!(fasta.is_empty());
    }

    #[test]
    fn test_read_fasta_file_missing() {
        let err = read_fasta_file("tests/data/no-such-file.faa").unwrap_err();
        assert!(matches!(err, OgError::File { .. }));
        assert!(err.to_string().contains("no-such-file.faa"));
    }

    #[test]
    fn test_write_fasta_record() {
        let mut out: Vec<u8> = Vec::new();
        write_fasta_record(&mut out, "seqA", "MKV").unwrap();
        write_fasta_record(&mut out, "seqB", "GGA").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">seqA\nMKV\n>seqB\nGGA\n");
    }
}
