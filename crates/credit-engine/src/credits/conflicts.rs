// WOTC and empowerment zone credits cannot both be claimed for the same hires
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCredits {
    pub wotc: Decimal,
    pub empowerment: Decimal,
}

/// Keep the larger of the two when both apply; WOTC wins ties
pub fn resolve_conflicts(wotc: Decimal, empowerment: Decimal) -> ResolvedCredits {
    if wotc > Decimal::ZERO && empowerment > Decimal::ZERO {
        if wotc >= empowerment {
            return ResolvedCredits {
                wotc,
                empowerment: Decimal::ZERO,
            };
        }
        return ResolvedCredits {
            wotc: Decimal::ZERO,
            empowerment,
        };
    }
    ResolvedCredits { wotc, empowerment }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_larger_wotc_wins() {
        let r = resolve_conflicts(d(14_400), d(9_000));
        assert_eq!(r.wotc, d(14_400));
        assert_eq!(r.empowerment, Decimal::ZERO);
    }

    #[test]
    fn test_larger_empowerment_wins() {
        let r = resolve_conflicts(d(2_400), d(9_000));
        assert_eq!(r.wotc, Decimal::ZERO);
        assert_eq!(r.empowerment, d(9_000));
    }

    #[test]
    fn test_tie_goes_to_wotc() {
        let r = resolve_conflicts(d(6_000), d(6_000));
        assert_eq!(r.wotc, d(6_000));
        assert_eq!(r.empowerment, Decimal::ZERO);
    }

    #[test]
    fn test_single_credit_passes_through() {
        assert_eq!(
            resolve_conflicts(d(0), d(9_000)),
            ResolvedCredits {
                wotc: d(0),
                empowerment: d(9_000)
            }
        );
        assert_eq!(
            resolve_conflicts(d(11_200), d(0)),
            ResolvedCredits {
                wotc: d(11_200),
                empowerment: d(0)
            }
        );
    }
}
