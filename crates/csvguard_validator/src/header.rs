//! Header reconciliation.
//!
//! The one-time comparison of a dataset's actual column names against the
//! schema's expected names, run before any row is processed.

use csvguard_core::Finding;

/// Compares the actual header sequence against the expected one.
///
/// Sequence equality (order and membership) decides *whether* to report;
/// the missing/extra follow-ups are computed by set difference. A pure
/// reordering of the expected names therefore yields a single
/// `HeaderMismatch` with no follow-ups.
///
/// When the header could not be determined at all (`None`), one mismatch
/// finding against `none` is emitted, then one `MissingField` per expected
/// column in schema order.
pub(crate) fn reconcile(actual: Option<&[String]>, expected: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();

    let Some(actual) = actual else {
        findings.push(Finding::HeaderMismatch {
            actual: None,
            expected: expected.to_vec(),
        });
        for name in expected {
            findings.push(Finding::MissingField { field: name.clone() });
        }
        return findings;
    };

    if actual != expected {
        findings.push(Finding::HeaderMismatch {
            actual: Some(actual.to_vec()),
            expected: expected.to_vec(),
        });

        for name in expected {
            if !actual.contains(name) {
                findings.push(Finding::MissingField { field: name.clone() });
            }
        }
        for name in actual {
            if !expected.contains(name) {
                findings.push(Finding::UnexpectedField { field: name.clone() });
            }
        }
    }

    findings
}
