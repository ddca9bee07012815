//! In-memory PQP fixtures for unit tests

use rusqlite::{params, Connection};

use crate::db::PqpDatabase;

/// Minimal PQP schema, upper-cased like OpenSWATH writes it
pub(crate) const PQP_SCHEMA: &str = include_str!("../tests/fixtures/schema.sql");

pub(crate) fn empty_library() -> PqpDatabase {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(PQP_SCHEMA).unwrap();
    PqpDatabase::from_connection(conn)
}

pub(crate) fn add_protein(db: &PqpDatabase, id: i64, accession: &str, decoy: i64) {
    db.connection()
        .execute(
            "INSERT INTO PROTEIN (ID, PROTEIN_ACCESSION, DECOY) VALUES (?1, ?2, ?3)",
            params![id, accession, decoy],
        )
        .unwrap();
}

/// Insert a peptide with one precursor of the same id and decoy flag
pub(crate) fn add_peptide(db: &PqpDatabase, id: i64, sequence: &str, decoy: i64, proteins: &[i64]) {
    let conn = db.connection();
    conn.execute(
        "INSERT INTO PEPTIDE (ID, MODIFIED_SEQUENCE, DECOY) VALUES (?1, ?2, ?3)",
        params![id, sequence, decoy],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO PRECURSOR (ID, DECOY) VALUES (?1, ?2)",
        params![id, decoy],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO PRECURSOR_PEPTIDE_MAPPING (PRECURSOR_ID, PEPTIDE_ID) VALUES (?1, ?1)",
        params![id],
    )
    .unwrap();
    for protein in proteins {
        conn.execute(
            "INSERT INTO PEPTIDE_PROTEIN_MAPPING (PEPTIDE_ID, PROTEIN_ID) VALUES (?1, ?2)",
            params![id, protein],
        )
        .unwrap();
    }
}

pub(crate) fn decoy_flag(db: &PqpDatabase, table: &str, id: i64) -> i64 {
    db.query_scalar(&format!("SELECT DECOY FROM {} WHERE ID = ?1", table), [id])
        .unwrap()
}

/// Small consistent library: two target groups, one decoy group
///
/// | protein | accession                       | decoy |
/// |---------|---------------------------------|-------|
/// | 1       | 2/sp\|P1\|A_HUMAN/sp\|P2\|B_HUMAN | 0     |
/// | 2       | 1/sp\|P3\|C_HUMAN                | 0     |
/// | 3       | 1/DECOY_sp\|P3\|C_HUMAN          | 1     |
///
/// Peptides 1, 2, 5 map to protein 1; peptides 2, 3 to protein 2;
/// decoy peptide 4 to protein 3.
pub(crate) fn sample_library() -> PqpDatabase {
    let db = empty_library();
    add_protein(&db, 1, "2/sp|P1|A_HUMAN/sp|P2|B_HUMAN", 0);
    add_protein(&db, 2, "1/sp|P3|C_HUMAN", 0);
    add_protein(&db, 3, "1/DECOY_sp|P3|C_HUMAN", 1);

    add_peptide(&db, 1, "PEPTIDEK", 0, &[1]);
    add_peptide(&db, 2, "PEPT(UniMod:21)IDEK", 0, &[1, 2]);
    add_peptide(&db, 3, "ELVISK", 0, &[2]);
    add_peptide(&db, 4, "KEDITPEP", 1, &[3]);
    add_peptide(&db, 5, "SAMPLER", 0, &[1]);
    db
}
