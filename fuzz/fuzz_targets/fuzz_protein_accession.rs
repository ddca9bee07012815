#![no_main]

use libfuzzer_sys::fuzz_target;
use pqpstat::stats::ProteinGroup;

fuzz_target!(|data: &[u8]| {
    // Accessions come straight from the database; any text must parse without panicking
    let accession = String::from_utf8_lossy(data);
    let group = ProteinGroup::parse(&accession);

    // Re-parsing the canonical form yields the same members
    if !group.is_empty() && group.iter().all(|p| !p.is_empty() && !p.contains('/')) {
        assert_eq!(ProteinGroup::parse(&group.to_string()), group);
    }
});
