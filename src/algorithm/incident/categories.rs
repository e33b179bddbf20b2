//! Incident category classification
//!
//! A report may tick several report-type questions at once. Every aggregate
//! downstream needs exactly one category per incident, so the flags collapse
//! by clinical severity, not by their order on the form:
//! Suicide > Aggression > Fall > Medication > Security > Other > Unknown.

use crate::models::incident::IncidentCategory;
use crate::models::raw::IncidentFlags;

/// Classify a set of report-type flags into a single category
#[must_use]
pub const fn classify(flags: &IncidentFlags) -> IncidentCategory {
    if flags.suicide {
        IncidentCategory::Suicide
    } else if flags.aggression {
        IncidentCategory::Aggression
    } else if flags.fall {
        IncidentCategory::Fall
    } else if flags.medication {
        IncidentCategory::Medication
    } else if flags.security {
        IncidentCategory::Security
    } else if flags.other {
        IncidentCategory::Other
    } else {
        IncidentCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_unknown() {
        assert_eq!(classify(&IncidentFlags::default()), IncidentCategory::Unknown);
    }

    #[test]
    fn test_single_flags() {
        let cases = [
            (IncidentFlags { fall: true, ..Default::default() }, IncidentCategory::Fall),
            (IncidentFlags { medication: true, ..Default::default() }, IncidentCategory::Medication),
            (IncidentFlags { security: true, ..Default::default() }, IncidentCategory::Security),
            (IncidentFlags { suicide: true, ..Default::default() }, IncidentCategory::Suicide),
            (IncidentFlags { aggression: true, ..Default::default() }, IncidentCategory::Aggression),
            (IncidentFlags { other: true, ..Default::default() }, IncidentCategory::Other),
        ];
        for (flags, expected) in cases {
            assert_eq!(classify(&flags), expected);
        }
    }

    #[test]
    fn test_precedence_is_not_form_order() {
        // Fall comes first on the form but aggression outranks it
        let flags = IncidentFlags {
            fall: true,
            aggression: true,
            ..Default::default()
        };
        assert_eq!(classify(&flags), IncidentCategory::Aggression);

        let flags = IncidentFlags {
            fall: true,
            medication: true,
            security: true,
            suicide: true,
            aggression: true,
            other: true,
        };
        assert_eq!(classify(&flags), IncidentCategory::Suicide);

        let flags = IncidentFlags {
            security: true,
            other: true,
            ..Default::default()
        };
        assert_eq!(classify(&flags), IncidentCategory::Security);
    }
}
