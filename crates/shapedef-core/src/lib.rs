// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Stereotype icon and toolbar definition engine.
//!
//! This crate reads the text format used to describe custom diagram icons
//! and toolbars:
//! - Lexical analysis with character and token pushback ([`source_analysis`])
//! - The definition grammar and its parser ([`definition`])
//! - The entities produced by the parser ([`model`])
//!
//! Parsing is synchronous and handles one text per call. Callers that work
//! with files (discovery, batching, reporting) live outside this crate.
//!
//! ```
//! use shapedef_core::definition::parse_definitions;
//!
//! let definitions = parse_definitions(
//!     "standard.def",
//!     "toolbar Standard {\n  id: standard\n  tools { separator }\n}\n",
//! )
//! .unwrap();
//! assert_eq!(definitions.toolbars[0].id, "standard");
//! ```

pub mod definition;
pub mod model;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::definition::{
        DefinitionHandler, DefinitionParser, Definitions, ParseError, parse_definitions,
    };
    pub use crate::model::{IconShape, ShapeCommand, StereotypeIcon, Tool, Toolbar};
    pub use crate::source_analysis::{SourcePos, StringSource};
}
