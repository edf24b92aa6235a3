#[cfg(test)]
mod tests {
    use crate::distribution::{
        compute, compute_batch, ContributorGroup, DistributionRequest, DistributionService,
        DistributionServiceTrait, ReceiverGroup,
    };
    use crate::errors::{Error, GroupSide, ValidationError};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    fn contributor(name: &str, percentage: f64, members: &[&str]) -> ContributorGroup {
        ContributorGroup {
            name: name.to_string(),
            percentage,
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn receiver(name: &str, percentage: f64, members: &[&str]) -> ReceiverGroup {
        ReceiverGroup {
            name: name.to_string(),
            percentage,
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn request(
        total_amount: f64,
        contributors: Vec<ContributorGroup>,
        receivers: Vec<ReceiverGroup>,
    ) -> DistributionRequest {
        DistributionRequest {
            total_amount,
            contributors,
            receivers,
        }
    }

    fn full_request() -> DistributionRequest {
        request(
            1000.0,
            vec![
                contributor("Parents", 50.0, &["mom", "dad"]),
                contributor("Siblings", 50.0, &["anu", "bala", "chitra"]),
            ],
            vec![
                receiver("Family", 30.0, &["ravi", "meena", "kiran"]),
                receiver("Friends", 70.0, &["joe", "sara"]),
            ],
        )
    }

    // ==================== Worked example ====================

    #[test]
    fn test_single_group_example() {
        let req = request(
            1000.0,
            vec![contributor("A", 60.0, &["a1", "a2"])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        let result = compute(&req).unwrap();

        assert_eq!(result.matrix.len(), 1);
        let group = &result.matrix[0];
        assert_eq!(group.group_name, "X");
        assert_eq!(group.rows.len(), 1);

        let row = &group.rows[0];
        assert_eq!(row.receiver, "x1");
        assert_eq!(row.details.len(), 2);
        assert_eq!(row.details[0].contributor, "a1");
        assert_eq!(row.details[0].amount, 300.0);
        assert_eq!(row.details[1].contributor, "a2");
        assert_eq!(row.details[1].amount, 300.0);
        assert_eq!(row.subtotal, 600.0);
        assert_eq!(group.group_total, 600.0);
        assert_eq!(result.overall_total, 600.0);
    }

    // ==================== Pairwise formula ====================

    #[test]
    fn test_pairwise_amounts_follow_formula() {
        let req = full_request();
        let result = compute(&req).unwrap();

        for (group, g) in result.matrix.iter().zip(&req.receivers) {
            for row in &group.rows {
                let mut details = row.details.iter();
                for c in &req.contributors {
                    for member in &c.members {
                        let detail = details.next().unwrap();
                        assert_eq!(&detail.contributor, member);
                        let expected = req.total_amount
                            * (c.percentage / 100.0)
                            * (1.0 / c.members.len() as f64)
                            * (g.percentage / 100.0)
                            * (1.0 / g.members.len() as f64);
                        assert_close(detail.amount, expected);
                    }
                }
                assert!(details.next().is_none());
            }
        }
    }

    #[test]
    fn test_amount_is_isolated_from_other_groups() {
        let base = request(
            900.0,
            vec![contributor("A", 50.0, &["a1", "a2", "a3"])],
            vec![receiver("X", 40.0, &["x1", "x2"])],
        );
        let mut extended = base.clone();
        extended
            .contributors
            .push(contributor("B", 25.0, &["b1"]));
        extended
            .receivers
            .push(receiver("Y", 10.0, &["y1", "y2", "y3", "y4"]));

        let lone = compute(&base).unwrap();
        let crowded = compute(&extended).unwrap();

        let lone_amount = lone.matrix[0].rows[0].details[0].amount;
        let crowded_amount = crowded.matrix[0].rows[0].details[0].amount;
        assert_eq!(lone_amount, crowded_amount);
        assert_eq!(lone_amount, 30.0);
    }

    // ==================== Conservation ====================

    #[test]
    fn test_full_percentages_conserve_total() {
        let req = full_request();
        assert!(req.is_fully_allocated());
        let result = compute(&req).unwrap();
        assert_close(result.overall_total, 1000.0);
    }

    #[test]
    fn test_partial_percentages_scale_total() {
        let req = request(
            1000.0,
            vec![contributor("A", 60.0, &["a1", "a2"])],
            vec![receiver("X", 50.0, &["x1"]), receiver("Y", 30.0, &["y1", "y2"])],
        );
        assert!(!req.is_fully_allocated());
        let result = compute(&req).unwrap();
        assert_close(result.overall_total, 1000.0 * 0.6 * 0.8);
    }

    #[test]
    fn test_percentages_above_hundred_are_accepted() {
        let req = request(
            100.0,
            vec![contributor("A", 150.0, &["a1"])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        let result = compute(&req).unwrap();
        assert_close(result.overall_total, 150.0);
    }

    #[test]
    fn test_subtotals_and_totals_are_consistent() {
        let result = compute(&full_request()).unwrap();

        let mut overall = 0.0;
        for group in &result.matrix {
            let mut group_total = 0.0;
            for row in &group.rows {
                let subtotal: f64 = row.details.iter().map(|d| d.amount).sum();
                assert_eq!(row.subtotal, subtotal);
                group_total += row.subtotal;
            }
            assert_eq!(group.group_total, group_total);
            overall += group.group_total;
        }
        assert_eq!(result.overall_total, overall);
    }

    // ==================== Ordering ====================

    #[test]
    fn test_output_order_matches_input_order() {
        let req = request(
            100.0,
            vec![
                contributor("Z", 50.0, &["zeta", "alpha"]),
                contributor("A", 50.0, &["mu"]),
            ],
            vec![
                receiver("Zed", 50.0, &["yy", "bb"]),
                receiver("Aye", 50.0, &["cc"]),
            ],
        );
        let result = compute(&req).unwrap();

        let groups: Vec<&str> = result.matrix.iter().map(|g| g.group_name.as_str()).collect();
        assert_eq!(groups, vec!["Zed", "Aye"]);

        let rows: Vec<&str> = result.matrix[0]
            .rows
            .iter()
            .map(|r| r.receiver.as_str())
            .collect();
        assert_eq!(rows, vec!["yy", "bb"]);

        let contributors: Vec<&str> = result.matrix[0].rows[0]
            .details
            .iter()
            .map(|d| d.contributor.as_str())
            .collect();
        assert_eq!(contributors, vec!["zeta", "alpha", "mu"]);
    }

    // ==================== Degenerate input ====================

    #[test]
    fn test_empty_receivers_give_empty_matrix() {
        let req = request(500.0, vec![contributor("A", 100.0, &["a1"])], vec![]);
        let result = compute(&req).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.overall_total, 0.0);
    }

    #[test]
    fn test_empty_contributors_give_rows_without_details() {
        let req = request(500.0, vec![], vec![receiver("X", 100.0, &["x1", "x2"])]);
        let result = compute(&req).unwrap();
        assert_eq!(result.matrix.len(), 1);
        assert_eq!(result.matrix[0].rows.len(), 2);
        assert!(result.matrix[0].rows.iter().all(|r| r.details.is_empty()));
        assert_eq!(result.overall_total, 0.0);
    }

    // ==================== Validation ====================

    #[test]
    fn test_zero_member_contributor_group_is_rejected() {
        let req = request(
            100.0,
            vec![contributor("Empty", 50.0, &[])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        match compute(&req) {
            Err(Error::Validation(ValidationError::EmptyGroup { side, group })) => {
                assert_eq!(side, GroupSide::Contributor);
                assert_eq!(group, "Empty");
            }
            other => panic!("expected empty group error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_member_receiver_group_is_rejected_even_without_contributors() {
        let req = request(100.0, vec![], vec![receiver("Nobody", 100.0, &[])]);
        let err = compute(&req).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(
            err,
            Error::Validation(ValidationError::EmptyGroup {
                side: GroupSide::Receiver,
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_total_is_rejected() {
        for total in [0.0, -10.0] {
            let req = request(
                total,
                vec![contributor("A", 100.0, &["a1"])],
                vec![receiver("X", 100.0, &["x1"])],
            );
            assert!(matches!(
                compute(&req),
                Err(Error::Validation(ValidationError::NonPositiveTotal(_)))
            ));
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let req = request(
            f64::NAN,
            vec![contributor("A", 100.0, &["a1"])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        assert!(compute(&req).unwrap_err().is_invalid_input());

        let req = request(
            100.0,
            vec![contributor("A", f64::INFINITY, &["a1"])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        assert!(compute(&req).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_overflowing_amounts_are_rejected() {
        let req = request(
            1e308,
            vec![contributor("A", 1e300, &["a1"])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        let err = compute(&req).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("overflow"));

        // Large but representable amounts still compute.
        let req = request(
            1e300,
            vec![contributor("A", 100.0, &["a1"])],
            vec![receiver("X", 100.0, &["x1"])],
        );
        assert_close(compute(&req).unwrap().overall_total, 1e300);
    }

    // ==================== Batch & service ====================

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let good = full_request();
        let bad = request(-1.0, vec![], vec![]);
        let results = compute_batch(&[good.clone(), bad, good]);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_invalid_input());
        assert_eq!(
            results[0].as_ref().unwrap(),
            results[2].as_ref().unwrap()
        );
    }

    #[test]
    fn test_service_trims_names_before_computing() {
        let service = DistributionService::new();
        let req = request(
            100.0,
            vec![contributor(" A ", 100.0, &[" a1", "a1 "])],
            vec![receiver("X", 100.0, &["  x1  "])],
        );
        let result = service.calculate(&req).unwrap();

        let row = &result.matrix[0].rows[0];
        assert_eq!(row.receiver, "x1");
        assert_eq!(row.details[0].contributor, "a1");
        assert_eq!(row.details[1].contributor, "a1");

        let view = service.contributor_view(&result);
        assert_eq!(view.len(), 1);
        assert_close(view[0].total, 100.0);
    }
}
