//! Shared PQP fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const PQP_SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Builder for small PQP libraries
pub struct LibraryBuilder {
    conn: Connection,
}

impl LibraryBuilder {
    pub fn new(conn: Connection) -> Self {
        conn.execute_batch(PQP_SCHEMA).unwrap();
        Self { conn }
    }

    pub fn in_memory() -> Self {
        Self::new(Connection::open_in_memory().unwrap())
    }

    pub fn protein(self, id: i64, accession: &str, decoy: i64) -> Self {
        self.conn
            .execute(
                "INSERT INTO PROTEIN (ID, PROTEIN_ACCESSION, DECOY) VALUES (?1, ?2, ?3)",
                params![id, accession, decoy],
            )
            .unwrap();
        self
    }

    pub fn peptide(self, id: i64, sequence: &str, decoy: i64, proteins: &[i64]) -> Self {
        self.conn
            .execute(
                "INSERT INTO PEPTIDE (ID, MODIFIED_SEQUENCE, DECOY) VALUES (?1, ?2, ?3)",
                params![id, sequence, decoy],
            )
            .unwrap();
        for protein in proteins {
            self.conn
                .execute(
                    "INSERT INTO PEPTIDE_PROTEIN_MAPPING (PEPTIDE_ID, PROTEIN_ID) VALUES (?1, ?2)",
                    params![id, protein],
                )
                .unwrap();
        }
        self
    }

    pub fn precursor(self, id: i64, decoy: i64, peptides: &[i64]) -> Self {
        self.conn
            .execute(
                "INSERT INTO PRECURSOR (ID, PRECURSOR_MZ, CHARGE, DECOY) VALUES (?1, 500.0, 2, ?2)",
                params![id, decoy],
            )
            .unwrap();
        for peptide in peptides {
            self.conn
                .execute(
                    "INSERT INTO PRECURSOR_PEPTIDE_MAPPING (PRECURSOR_ID, PEPTIDE_ID) VALUES (?1, ?2)",
                    params![id, peptide],
                )
                .unwrap();
        }
        self
    }

    pub fn build(self) -> Connection {
        self.conn
    }
}

/// Library on disk, removed when dropped
pub struct LibraryFile {
    _dir: TempDir,
    path: PathBuf,
}

impl LibraryFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write a library file using `build` to fill it
pub fn library_file(build: impl FnOnce(LibraryBuilder) -> LibraryBuilder) -> LibraryFile {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.pqp");
    let conn = Connection::open(&path).unwrap();
    build(LibraryBuilder::new(conn)).build().close().unwrap();
    LibraryFile { _dir: dir, path }
}

/// Two target protein groups, one decoy group, consistent decoy flags
pub fn sample_library(builder: LibraryBuilder) -> LibraryBuilder {
    builder
        .protein(1, "2/sp|P1|A_HUMAN/sp|P2|B_HUMAN", 0)
        .protein(2, "1/sp|P3|C_HUMAN", 0)
        .protein(3, "1/DECOY_sp|P3|C_HUMAN", 1)
        .peptide(1, "PEPTIDEK", 0, &[1])
        .peptide(2, "PEPT(UniMod:21)IDEK", 0, &[1, 2])
        .peptide(3, "ELVISK", 0, &[2])
        .peptide(4, "KEDITPEP", 1, &[3])
        .peptide(5, "SAMPLER", 0, &[1])
        .precursor(1, 0, &[1])
        .precursor(2, 0, &[2])
        .precursor(3, 0, &[3])
        .precursor(4, 1, &[4])
        .precursor(5, 0, &[5])
}

pub fn decoy_flags(conn: &Connection, table: &str) -> Vec<(i64, i64)> {
    let mut stmt = conn
        .prepare(&format!("SELECT ID, DECOY FROM {} ORDER BY ID", table))
        .unwrap();
    let flags = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    flags
}
