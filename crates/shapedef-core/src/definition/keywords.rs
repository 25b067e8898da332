// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Keyword and operator subtypes of the definition grammar.

use crate::source_analysis::{KeywordTable, OperatorTable};

/// Reserved words of the definition grammar.
///
/// Enumerated property values are written as plain words, so some of them
/// (`icon`, `width`, `height`) scan as keywords; the parser accepts keywords
/// wherever it expects a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Definitions
    Icon,
    Toolbar,

    // Icon properties
    Id,
    Title,
    Elements,
    Stereotype,
    Width,
    Height,
    MinWidth,
    MinHeight,
    LockSize,
    Display,
    TextAlignment,
    BaseColor,
    Shape,
    Outline,

    // Shape commands
    Circle,
    Ellipse,
    Line,
    Rect,
    RoundedRect,
    Arc,
    MoveTo,
    LineTo,
    ArcMoveTo,
    ArcTo,
    Close,

    // Shape parameters (`width` and `height` are shared with icon properties)
    X,
    Y,
    X0,
    Y0,
    X1,
    Y1,
    Radius,
    RadiusX,
    RadiusY,
    Start,
    Span,

    // Toolbar properties
    Priority,
    Tools,
    Tool,
    Separator,
    Element,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: &[Self] = &[
        Self::Icon,
        Self::Toolbar,
        Self::Id,
        Self::Title,
        Self::Elements,
        Self::Stereotype,
        Self::Width,
        Self::Height,
        Self::MinWidth,
        Self::MinHeight,
        Self::LockSize,
        Self::Display,
        Self::TextAlignment,
        Self::BaseColor,
        Self::Shape,
        Self::Outline,
        Self::Circle,
        Self::Ellipse,
        Self::Line,
        Self::Rect,
        Self::RoundedRect,
        Self::Arc,
        Self::MoveTo,
        Self::LineTo,
        Self::ArcMoveTo,
        Self::ArcTo,
        Self::Close,
        Self::X,
        Self::Y,
        Self::X0,
        Self::Y0,
        Self::X1,
        Self::Y1,
        Self::Radius,
        Self::RadiusX,
        Self::RadiusY,
        Self::Start,
        Self::Span,
        Self::Priority,
        Self::Tools,
        Self::Tool,
        Self::Separator,
        Self::Element,
    ];

    /// Returns the keyword as written in definition files (lower case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Toolbar => "toolbar",
            Self::Id => "id",
            Self::Title => "title",
            Self::Elements => "elements",
            Self::Stereotype => "stereotype",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "minwidth",
            Self::MinHeight => "minheight",
            Self::LockSize => "locksize",
            Self::Display => "display",
            Self::TextAlignment => "textalignment",
            Self::BaseColor => "basecolor",
            Self::Shape => "shape",
            Self::Outline => "outline",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::RoundedRect => "roundedrect",
            Self::Arc => "arc",
            Self::MoveTo => "moveto",
            Self::LineTo => "lineto",
            Self::ArcMoveTo => "arcmoveto",
            Self::ArcTo => "arcto",
            Self::Close => "close",
            Self::X => "x",
            Self::Y => "y",
            Self::X0 => "x0",
            Self::Y0 => "y0",
            Self::X1 => "x1",
            Self::Y1 => "y1",
            Self::Radius => "radius",
            Self::RadiusX => "radiusx",
            Self::RadiusY => "radiusy",
            Self::Start => "start",
            Self::Span => "span",
            Self::Priority => "priority",
            Self::Tools => "tools",
            Self::Tool => "tool",
            Self::Separator => "separator",
            Self::Element => "element",
        }
    }
}

/// Operators of the definition grammar. All are single characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Colon,
    Semicolon,
    LeftBrace,
    RightBrace,
    Comma,
    Minus,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: &[Self] = &[
        Self::Colon,
        Self::Semicolon,
        Self::LeftBrace,
        Self::RightBrace,
        Self::Comma,
        Self::Minus,
    ];

    /// Returns the operator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Minus => "-",
        }
    }
}

/// Builds the keyword table of the definition grammar.
#[must_use]
pub fn keyword_table() -> KeywordTable<Keyword> {
    Keyword::ALL.iter().map(|&k| (k.as_str(), k)).collect()
}

/// Builds the operator table of the definition grammar.
#[must_use]
pub fn operator_table() -> OperatorTable<Operator> {
    Operator::ALL.iter().map(|&o| (o.as_str(), o)).collect()
}
