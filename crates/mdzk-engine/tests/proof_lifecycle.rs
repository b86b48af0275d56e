//! End-to-end proof lifecycle: compile a registered circuit, issue a
//! credential, prove a disclosure request, verify, and reject tampering.

use mdzk_core::Timestamp;
use mdzk_crypto::{IssuerKeyPair, IssuerPublicKey};
use mdzk_engine::{
    compile, prove, resolve, sample, verify, zk_specs, AttributeKind, Circuit, EngineError,
    MdocClaims, ProverError, RequestedAttribute, SpecSelector, VerifierError, ZkSpecification,
};
use std::collections::BTreeMap;

struct Session {
    circuit: Circuit,
    spec: &'static ZkSpecification,
    issuer: IssuerKeyPair,
    issuer_key: IssuerPublicKey,
    mdoc: Vec<u8>,
    transcript: Vec<u8>,
    predicates: Vec<RequestedAttribute>,
}

fn session() -> Session {
    let spec = resolve(&SpecSelector::Latest).unwrap();
    let circuit = compile(spec).unwrap();
    let issuer = sample::sample_issuer().unwrap();
    let issuer_key = issuer.public_key();
    let mdoc = sample::sample_mdoc_bytes().unwrap();
    Session {
        circuit,
        spec,
        issuer,
        issuer_key,
        mdoc,
        transcript: sample::sample_transcript(),
        predicates: vec![
            RequestedAttribute::new("age_over_18", "true", AttributeKind::Primitive).unwrap(),
            RequestedAttribute::new("issuing_country", "DE", AttributeKind::Primitive).unwrap(),
            RequestedAttribute::new("family_name", "", AttributeKind::Presence).unwrap(),
        ],
    }
}

fn prove_session(s: &Session, time: &str) -> Result<Vec<u8>, EngineError> {
    prove(
        &s.circuit,
        s.spec,
        &s.mdoc,
        &s.issuer_key,
        &s.transcript,
        &s.predicates,
        time,
    )
    .map(|p| p.into_bytes())
}

fn verify_session(s: &Session, time: &str, proof: &[u8]) -> Result<(), EngineError> {
    verify(
        &s.circuit,
        s.spec,
        &s.issuer_key,
        &s.transcript,
        &s.predicates,
        time,
        proof,
        sample::SAMPLE_DOC_TYPE,
    )
}

#[test]
fn registry_hashes_match_compiler_output() {
    for spec in zk_specs() {
        let circuit = compile(spec).unwrap();
        assert_eq!(circuit.digest_hex(), spec.circuit_hash, "{spec}");
    }
}

#[test]
fn three_entry_registry_scenario() {
    // A registry publishing versions 1, 2, 3: index 2 and "latest" resolve
    // to v3; index 5 fails rather than clamping.
    assert_eq!(zk_specs().len(), 3);
    assert_eq!(resolve(&SpecSelector::Index(2)).unwrap().version, 3);
    assert_eq!(resolve(&SpecSelector::Latest).unwrap().version, 3);
    assert!(matches!(
        resolve(&SpecSelector::Index(5)),
        Err(EngineError::SpecNotFound { index: 5, available: 3 })
    ));
}

#[test]
fn round_trip_proof_verifies() {
    let s = session();
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    verify_session(&s, sample::SAMPLE_TIME, &proof).unwrap();
}

#[test]
fn proof_byte_flips_reject() {
    let s = session();
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    // Flip one bit at a time across the artifact. Every mutation must
    // reject, whether it breaks the JSON, a digest string, or the tag.
    for pos in (0..proof.len()).step_by(7) {
        let mut tampered = proof.clone();
        tampered[pos] ^= 0x20;
        if tampered == proof {
            continue;
        }
        assert!(
            verify_session(&s, sample::SAMPLE_TIME, &tampered).is_err(),
            "bit flip at byte {pos} was accepted"
        );
    }
}

#[test]
fn transcript_substitution_rejects() {
    let s = session();
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    let mut other = session();
    other.transcript = b"a different session".to_vec();
    assert!(matches!(
        verify_session(&other, sample::SAMPLE_TIME, &proof),
        Err(EngineError::Verifier(VerifierError::StatementMismatch))
    ));
}

#[test]
fn predicate_reorder_rejects() {
    let s = session();
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    let mut reordered = session();
    reordered.predicates.swap(0, 1);
    assert!(matches!(
        verify_session(&reordered, sample::SAMPLE_TIME, &proof),
        Err(EngineError::Verifier(VerifierError::StatementMismatch))
    ));
}

#[test]
fn issuer_key_swap_rejects() {
    let s = session();
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    let mut swapped = session();
    swapped.issuer_key = IssuerKeyPair::from_seed(&[77u8; 32]).unwrap().public_key();
    assert!(verify_session(&swapped, sample::SAMPLE_TIME, &proof).is_err());
}

#[test]
fn wrong_circuit_rejects_on_both_sides() {
    let s = session();
    let other_spec = resolve(&SpecSelector::Index(0)).unwrap();
    let other_circuit = compile(other_spec).unwrap();

    let prove_err = prove(
        &other_circuit,
        s.spec,
        &s.mdoc,
        &s.issuer_key,
        &s.transcript,
        &s.predicates,
        sample::SAMPLE_TIME,
    )
    .unwrap_err();
    assert!(matches!(
        prove_err,
        EngineError::Prover(ProverError::CircuitMismatch(_))
    ));

    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    let verify_err = verify(
        &other_circuit,
        other_spec,
        &s.issuer_key,
        &s.transcript,
        &s.predicates,
        sample::SAMPLE_TIME,
        &proof,
        sample::SAMPLE_DOC_TYPE,
    )
    .unwrap_err();
    assert!(matches!(
        verify_err,
        EngineError::Verifier(VerifierError::CircuitMismatch(_))
    ));
}

#[test]
fn expiry_rejects_on_both_sides() {
    let s = session();

    // Proving after valid_until fails outright.
    assert!(matches!(
        prove_session(&s, "2036-06-01T00:00:00Z"),
        Err(EngineError::Prover(ProverError::DocumentExpired { .. }))
    ));

    // An honest earlier proof rejects when verified at a later instant.
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    assert!(matches!(
        verify_session(&s, "2034-12-31T23:59:59Z", &proof),
        Err(EngineError::Verifier(VerifierError::StatementMismatch))
    ));
}

#[test]
fn freshly_issued_credential_round_trips() {
    let issuer = IssuerKeyPair::from_seed(&[21u8; 32]).unwrap();
    let mut attributes = BTreeMap::new();
    attributes.insert("age_over_21".to_owned(), "false".to_owned());
    attributes.insert("resident_city".to_owned(), "Utrecht".to_owned());
    let claims = MdocClaims {
        doc_type: "org.iso.18013.5.1.mDL".to_owned(),
        valid_from: Timestamp::parse("2025-06-01T00:00:00Z").unwrap(),
        valid_until: Timestamp::parse("2030-06-01T00:00:00Z").unwrap(),
        attributes,
    };
    let mdoc = claims.seal(&issuer).unwrap();

    let spec = resolve(&SpecSelector::Index(0)).unwrap();
    let circuit = compile(spec).unwrap();
    let predicates =
        vec![RequestedAttribute::new("resident_city", "Utrecht", AttributeKind::Primitive)
            .unwrap()];
    let transcript = b"fresh session".to_vec();
    let time = "2026-02-03T04:05:06Z";

    let proof = prove(
        &circuit,
        spec,
        &mdoc,
        &issuer.public_key(),
        &transcript,
        &predicates,
        time,
    )
    .unwrap();
    verify(
        &circuit,
        spec,
        &issuer.public_key(),
        &transcript,
        &predicates,
        time,
        proof.as_bytes(),
        "org.iso.18013.5.1.mDL",
    )
    .unwrap();
}

#[test]
fn prover_binds_doc_type_from_credential() {
    // The statement's doc_type comes from the credential, so a verifier
    // expecting any other type rejects even with identical predicates.
    let s = session();
    let proof = prove_session(&s, sample::SAMPLE_TIME).unwrap();
    let err = verify(
        &s.circuit,
        s.spec,
        &s.issuer_key,
        &s.transcript,
        &s.predicates,
        sample::SAMPLE_TIME,
        &proof,
        "org.iso.18013.5.1.mDL.extra",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Verifier(VerifierError::StatementMismatch)
    ));
}

#[test]
fn credential_reissued_with_same_claims_yields_same_proof() {
    // RFC 6979 signing plus canonical encodings: issuing the same claims
    // twice gives byte-identical credentials, and proving twice gives
    // byte-identical proofs.
    let s = session();
    let reissued = sample::sample_claims().unwrap().seal(&s.issuer).unwrap();
    assert_eq!(s.mdoc, reissued);
    assert_eq!(
        prove_session(&s, sample::SAMPLE_TIME).unwrap(),
        prove_session(&s, sample::SAMPLE_TIME).unwrap()
    );
}
