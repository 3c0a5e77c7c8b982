//! # Custody Flow Tests
//!
//! End-to-end custody flows at the domain level: the four subsystems
//! working together without the service layer in between.

#[cfg(test)]
mod tests {
    use cc_participant_registry::ParticipantRegistry;
    use cc_product_registry::{ProductDetails, ProductRegistry};
    use cc_provenance_ledger::ProvenanceLedger;
    use cc_transfer_engine::invariants::check_all_invariants;
    use cc_transfer_engine::transfer;
    use rand::Rng;
    use shared_types::{CustodyError, Role};

    fn model123() -> ProductDetails {
        ProductDetails {
            model_number: "Model123".to_string(),
            part_number: "Part456".to_string(),
            serial_number: "Serial789".to_string(),
            cost: 100,
        }
    }

    // The worked example from the original ledger's acceptance tests:
    // Alice the manufacturer registers a product, Bob the supplier takes
    // custody, and a manufacturer posing as a consumer target is rejected.
    #[test]
    fn test_alice_and_bob_worked_example() {
        let mut participants = ParticipantRegistry::new();
        let alice = participants.register("Alice", "password", [0xAA; 20], Role::Manufacturer);
        let bob = participants.register("Bob", "password", [0xBB; 20], Role::Supplier);

        let mut products = ProductRegistry::new();
        let creator = participants.lookup(alice).unwrap();
        let product = products.add_product(creator, model123()).unwrap();

        // Owner is Alice, history is empty.
        assert_eq!(products.lookup(product).unwrap().current_owner, alice);
        let mut ledger = ProvenanceLedger::new();
        assert_eq!(ledger.history(product).count(), 0);

        // Transfer to Bob: owner moves, history grows to one.
        transfer(&participants, &mut products, &mut ledger, product, bob, alice).unwrap();
        assert_eq!(products.lookup(product).unwrap().current_owner, bob);
        assert_eq!(ledger.history_len(product), 1);

        // A "consumer" whose stored role is Manufacturer is rejected.
        let impostor = participants.register("ConsumerX", "password", [0xCC; 20], Role::Manufacturer);
        let err = transfer(
            &participants,
            &mut products,
            &mut ledger,
            product,
            impostor,
            bob,
        )
        .unwrap_err();
        assert!(err.is_role_violation());
        assert_eq!(ledger.history_len(product), 1);
    }

    #[test]
    fn test_full_custody_chain_audits_clean() {
        let mut participants = ParticipantRegistry::new();
        let m = participants.register("Acme", "pw", [1u8; 20], Role::Manufacturer);
        let s = participants.register("Globex", "pw", [2u8; 20], Role::Supplier);
        let c = participants.register("Homer", "pw", [3u8; 20], Role::Consumer);

        let mut products = ProductRegistry::new();
        let mut ledger = ProvenanceLedger::new();

        // Walk several products through the full chain.
        for _ in 0..5 {
            let creator = participants.lookup(m).unwrap().clone();
            let product = products.add_product(&creator, model123()).unwrap();

            transfer(&participants, &mut products, &mut ledger, product, s, m).unwrap();
            transfer(&participants, &mut products, &mut ledger, product, c, s).unwrap();

            assert_eq!(products.lookup(product).unwrap().current_owner, c);
            let indices: Vec<u64> = ledger.history(product).map(|r| r.sequence_index).collect();
            assert_eq!(indices, vec![0, 1]);
        }

        assert_eq!(ledger.len(), 10);
        assert!(check_all_invariants(&participants, &products, &ledger).is_ok());
    }

    #[test]
    fn test_global_record_indices_interleave_across_products() {
        let mut participants = ParticipantRegistry::new();
        let m = participants.register("Acme", "pw", [1u8; 20], Role::Manufacturer);
        let s = participants.register("Globex", "pw", [2u8; 20], Role::Supplier);
        let c = participants.register("Homer", "pw", [3u8; 20], Role::Consumer);

        let mut products = ProductRegistry::new();
        let creator = participants.lookup(m).unwrap().clone();
        let first = products.add_product(&creator, model123()).unwrap();
        let second = products.add_product(&creator, model123()).unwrap();

        let mut ledger = ProvenanceLedger::new();
        let a = transfer(&participants, &mut products, &mut ledger, first, s, m).unwrap();
        let b = transfer(&participants, &mut products, &mut ledger, second, s, m).unwrap();
        let d = transfer(&participants, &mut products, &mut ledger, first, c, s).unwrap();

        // Global indices count all transfers; per-product sequences do not.
        assert_eq!(
            (a.record_index, b.record_index, d.record_index),
            (0, 1, 2)
        );
        assert_eq!(ledger.record(2).unwrap().sequence_index, 1);
        assert_eq!(ledger.record(1).unwrap().sequence_index, 0);
    }

    #[test]
    fn test_random_dangling_ids_never_mutate_state() {
        let mut participants = ParticipantRegistry::new();
        let m = participants.register("Acme", "pw", [1u8; 20], Role::Manufacturer);
        let s = participants.register("Globex", "pw", [2u8; 20], Role::Supplier);

        let mut products = ProductRegistry::new();
        let creator = participants.lookup(m).unwrap().clone();
        let product = products.add_product(&creator, model123()).unwrap();

        let mut ledger = ProvenanceLedger::new();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            // Ids past the registry sizes are always dangling.
            let bad_participant = rng.gen_range(2u64..u64::MAX);
            let bad_product = rng.gen_range(1u64..u64::MAX);

            let err = transfer(
                &participants,
                &mut products,
                &mut ledger,
                bad_product,
                s,
                m,
            )
            .unwrap_err();
            assert!(err.is_not_found());

            let err = transfer(
                &participants,
                &mut products,
                &mut ledger,
                product,
                bad_participant,
                m,
            )
            .unwrap_err();
            assert_eq!(err, CustodyError::ParticipantNotFound(bad_participant));

            assert!(!participants.authenticate(bad_participant, "Acme", "pw", Role::Manufacturer));
        }

        // A hundred rejections later, nothing has changed.
        assert!(ledger.is_empty());
        assert_eq!(products.lookup(product).unwrap().current_owner, m);
        assert!(check_all_invariants(&participants, &products, &ledger).is_ok());
    }
}
