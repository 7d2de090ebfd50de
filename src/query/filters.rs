//! Filter chain
//!
//! Composable field predicates over either entity kind. The field set
//! is closed and checked at parse time: `diameter` and `is_hazardous`
//! target the object, `distance` targets its passes. Declared-numeric
//! fields compare numerically, the hazard flag as a boolean.
//!
//! Application order is fixed: every object-kind predicate narrows the
//! candidate set before any pass-kind predicate runs, because
//! pass-kind predicates iterate the owned pass list per candidate.

use std::fmt;

use crate::models::CelestialObject;

use super::errors::{QueryError, QueryResult};

/// Comparison operators for filter predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl Comparator {
    /// Parses an operator symbol.
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Comparator::Lt),
            "<=" => Some(Comparator::Le),
            "=" => Some(Comparator::Eq),
            "!=" => Some(Comparator::Ne),
            ">" => Some(Comparator::Gt),
            ">=" => Some(Comparator::Ge),
            _ => None,
        }
    }

    /// Returns the operator symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
        }
    }

    /// Evaluates `actual <op> expected`.
    pub fn holds<T: PartialOrd>(&self, actual: T, expected: T) -> bool {
        match self {
            Comparator::Lt => actual < expected,
            Comparator::Le => actual <= expected,
            Comparator::Eq => actual == expected,
            Comparator::Ne => actual != expected,
            Comparator::Gt => actual > expected,
            Comparator::Ge => actual >= expected,
        }
    }
}

/// Which entity kind a predicate inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Object-level field
    Object,
    /// Pass-level field (existential over the owned pass list)
    Pass,
}

/// The closed set of filterable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Minimum estimated diameter (km) — object level
    Diameter,
    /// Potentially-hazardous flag — object level
    IsHazardous,
    /// Miss distance (km) — pass level
    Distance,
}

impl FilterField {
    /// Parses a field name. Unknown names are rejected here, at parse
    /// time, never at apply time.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "diameter" => Some(FilterField::Diameter),
            "is_hazardous" | "isHazardous" => Some(FilterField::IsHazardous),
            "distance" => Some(FilterField::Distance),
            _ => None,
        }
    }

    /// Returns the entity kind this field lives on.
    pub fn target(&self) -> TargetKind {
        match self {
            FilterField::Diameter | FilterField::IsHazardous => TargetKind::Object,
            FilterField::Distance => TargetKind::Pass,
        }
    }

    /// Returns the canonical field name.
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::Diameter => "diameter",
            FilterField::IsHazardous => "is_hazardous",
            FilterField::Distance => "distance",
        }
    }
}

/// A literal value typed per field kind
#[derive(Debug, Clone, Copy, PartialEq)]
enum FilterValue {
    Number(f64),
    Flag(bool),
}

/// One field/comparator/value test
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    field: FilterField,
    comparator: Comparator,
    value: FilterValue,
}

impl FilterPredicate {
    /// Parses a raw `field:op:value` filter string.
    ///
    /// Exactly two delimiters are required. The literal is parsed per
    /// field kind (number for diameter/distance, boolean for the
    /// hazard flag), so a bad literal fails here rather than silently
    /// matching nothing.
    pub fn parse(raw: &str) -> QueryResult<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() != 3 {
            return Err(QueryError::filter_parse(
                raw,
                "expected exactly 'field:operator:value'",
            ));
        }

        let field =
            FilterField::parse(parts[0]).ok_or_else(|| QueryError::unsupported_field(parts[0]))?;
        let comparator = Comparator::parse(parts[1]).ok_or_else(|| {
            QueryError::filter_parse(raw, format!("unknown operator '{}'", parts[1]))
        })?;

        let value = match field {
            FilterField::Diameter | FilterField::Distance => {
                let number: f64 = parts[2].parse().map_err(|_| {
                    QueryError::filter_parse(raw, format!("'{}' is not a number", parts[2]))
                })?;
                FilterValue::Number(number)
            }
            FilterField::IsHazardous => match parts[2].to_ascii_lowercase().as_str() {
                "true" => FilterValue::Flag(true),
                "false" => FilterValue::Flag(false),
                other => {
                    return Err(QueryError::filter_parse(
                        raw,
                        format!("'{}' is not a boolean", other),
                    ))
                }
            },
        };

        Ok(Self {
            field,
            comparator,
            value,
        })
    }

    /// Returns the entity kind this predicate inspects.
    pub fn target(&self) -> TargetKind {
        self.field.target()
    }

    /// Checks whether a candidate object satisfies the predicate.
    ///
    /// Pass-level predicates hold iff ANY owned pass satisfies them,
    /// short-circuiting on the first match. The full pass list is
    /// inspected, not only passes on the queried dates.
    pub fn matches(&self, object: &CelestialObject) -> bool {
        match self.field {
            FilterField::Diameter => self.holds_number(object.diameter_min_km),
            FilterField::IsHazardous => self.holds_flag(object.is_hazardous),
            FilterField::Distance => object
                .passes()
                .iter()
                .any(|pass| self.holds_number(pass.miss_distance_km)),
        }
    }

    fn holds_number(&self, actual: f64) -> bool {
        match self.value {
            FilterValue::Number(expected) => self.comparator.holds(actual, expected),
            FilterValue::Flag(_) => false,
        }
    }

    fn holds_flag(&self, actual: bool) -> bool {
        match self.value {
            FilterValue::Flag(expected) => self.comparator.holds(actual, expected),
            FilterValue::Number(_) => false,
        }
    }
}

impl fmt::Display for FilterPredicate {
    /// Renders the canonical `field:op:value` form, used when logging
    /// a planned search.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.field.name(), self.comparator.symbol())?;
        match self.value {
            FilterValue::Number(number) => write!(f, "{}", number),
            FilterValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

/// Applies a declared filter chain to a candidate set
pub struct FilterChain;

impl FilterChain {
    /// Parses a list of raw filter strings, preserving declaration
    /// order.
    pub fn parse_all(raw_filters: &[String]) -> QueryResult<Vec<FilterPredicate>> {
        raw_filters.iter().map(|raw| FilterPredicate::parse(raw)).collect()
    }

    /// Applies predicates to the candidate set.
    ///
    /// Object-kind predicates run first in declared order, fully
    /// narrowing the set; pass-kind predicates then run in declared
    /// order over the narrowed set.
    pub fn apply<'a>(
        predicates: &[FilterPredicate],
        mut candidates: Vec<&'a CelestialObject>,
    ) -> Vec<&'a CelestialObject> {
        for predicate in predicates.iter().filter(|p| p.target() == TargetKind::Object) {
            candidates.retain(|object| predicate.matches(object));
        }
        for predicate in predicates.iter().filter(|p| p.target() == TargetKind::Pass) {
            candidates.retain(|object| predicate.matches(object));
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApproachPass, CelestialObject};
    use crate::query::errors::QueryErrorCode;
    use chrono::NaiveDate;

    fn object(name: &str, diameter: f64, hazardous: bool, distances: &[f64]) -> CelestialObject {
        let mut obj = CelestialObject::new("1", name, "url", 20.0, diameter, hazardous);
        for (i, &distance) in distances.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2020, 1, (i + 1) as u32).unwrap();
            obj.record_pass(ApproachPass::new(name, distance, date));
        }
        obj
    }

    #[test]
    fn test_parse_valid_filter() {
        let predicate = FilterPredicate::parse("diameter:>=:0.5").unwrap();
        assert_eq!(predicate.target(), TargetKind::Object);
    }

    #[test]
    fn test_display_renders_canonical_form() {
        let predicate = FilterPredicate::parse("diameter:>=:0.5").unwrap();
        assert_eq!(predicate.to_string(), "diameter:>=:0.5");

        // The original spelling normalizes to the canonical field name
        let predicate = FilterPredicate::parse("isHazardous:=:true").unwrap();
        assert_eq!(predicate.to_string(), "is_hazardous:=:true");
    }

    #[test]
    fn test_parse_rejects_malformed_shape() {
        let err = FilterPredicate::parse("diameter>=0.5").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::NeoFilterParse);

        let err = FilterPredicate::parse("diameter:>=:0.5:extra").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::NeoFilterParse);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = FilterPredicate::parse("speed:>:10").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::NeoUnsupportedField);
    }

    #[test]
    fn test_parse_rejects_unknown_operator() {
        let err = FilterPredicate::parse("diameter:~:0.5").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::NeoFilterParse);
    }

    #[test]
    fn test_parse_rejects_bad_literal() {
        let err = FilterPredicate::parse("diameter:>:wide").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::NeoFilterParse);

        let err = FilterPredicate::parse("is_hazardous:=:maybe").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::NeoFilterParse);
    }

    #[test]
    fn test_numeric_comparison_not_lexicographic() {
        // Lexicographically "9.0" > "10.0"; numerically it is not
        let predicate = FilterPredicate::parse("diameter:>:9.0").unwrap();
        let big = object("Big", 10.0, false, &[]);
        assert!(predicate.matches(&big));
    }

    #[test]
    fn test_hazard_flag_comparison() {
        let hazardous = object("H", 1.0, true, &[]);
        let benign = object("B", 1.0, false, &[]);

        let predicate = FilterPredicate::parse("is_hazardous:=:true").unwrap();
        assert!(predicate.matches(&hazardous));
        assert!(!predicate.matches(&benign));

        let predicate = FilterPredicate::parse("is_hazardous:!=:true").unwrap();
        assert!(predicate.matches(&benign));
    }

    #[test]
    fn test_distance_is_existential_over_all_passes() {
        let predicate = FilterPredicate::parse("distance:<:600").unwrap();

        // One of several passes qualifies
        let eros = object("Eros", 1.0, false, &[1000.0, 500.0]);
        assert!(predicate.matches(&eros));

        // No pass qualifies
        let far = object("Far", 1.0, false, &[1000.0, 2000.0]);
        assert!(!predicate.matches(&far));

        // No passes at all
        let none = object("None", 1.0, false, &[]);
        assert!(!none.passes().iter().any(|_| true));
        assert!(!predicate.matches(&none));
    }

    #[test]
    fn test_object_filters_run_before_pass_filters() {
        let a = object("A", 0.2, false, &[100.0]);
        let b = object("B", 0.9, false, &[100.0]);
        let c = object("C", 0.9, false, &[5000.0]);

        let predicates = FilterChain::parse_all(&[
            // Pass-kind declared first; still applied after diameter
            "distance:<:600".to_string(),
            "diameter:>:0.5".to_string(),
        ])
        .unwrap();

        let survivors = FilterChain::apply(&predicates, vec![&a, &b, &c]);
        let names: Vec<&str> = survivors.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_intersection_semantics() {
        let a = object("A", 0.9, true, &[100.0]);
        let predicates = FilterChain::parse_all(&[
            "diameter:>:0.5".to_string(),
            "is_hazardous:=:true".to_string(),
            "distance:<:600".to_string(),
        ])
        .unwrap();

        // Survives only because every predicate holds independently
        let survivors = FilterChain::apply(&predicates, vec![&a]);
        assert_eq!(survivors.len(), 1);

        for predicate in &predicates {
            assert!(predicate.matches(&a));
        }
    }
}
