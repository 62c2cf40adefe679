//! Deterministic PPA/VPPA term sheet scorecard.
//!
//! Structured facts extracted from a term sheet go in; a 0-100 score per
//! contract term comes out, where 0 is buyer-favorable and 100 is a red flag.
//! Scoring is pure: no I/O, no shared state, the same facts always produce
//! the same result.
//!
//! ```
//! use ppa_scorecard::facts::Facts;
//! use ppa_scorecard::score::score_all;
//! use ppa_scorecard::terms::TermId;
//!
//! let facts = Facts::from_json(r#"{"negprice": {"negPriceMechanism": "zero_floor"}}"#).unwrap();
//! let result = score_all(&facts);
//! assert!(result.score(TermId::NegPrice) < 25.0);
//! ```

pub mod context;
pub mod facts;
pub mod numeric;
pub mod report_helpers;
pub mod score;
pub mod tables;
pub mod terms;
