// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Icon definitions and their shape programs.
//!
//! ```text
//! IconProp    := "id" ":" Word
//!              | "title" ":" String
//!              | "elements" ":" Word ("," Word)*
//!              | "stereotype" ":" String
//!              | ("width" | "height" | "minwidth" | "minheight") ":" Number
//!              | "locksize" ":" Word
//!              | "display" ":" Word
//!              | "textalignment" ":" Word
//!              | "basecolor" ":" Color
//!              | ("shape" | "outline") "{" ShapeCmd* "}"
//! ShapeCmd    := Command "{" (Parameter ":" Number)* "}"
//!              | "close" ["{" "}"]
//! ```
//!
//! Every shape command takes a fixed set of named parameters (see
//! [`shape_parameters`]). Parameters may come in any order, but each must
//! appear exactly once.

use super::{DefToken, DefinitionParser, GrammarError, Keyword, ParseError, unknown_property};
use crate::model::{ElementType, IconShape, ShapeCommand, ShapeValue, StereotypeIcon};
use crate::source_analysis::SourcePos;

impl DefinitionParser {
    /// Parses the rest of an icon definition after the `icon` keyword.
    pub(super) fn parse_icon(&mut self, header: &DefToken) -> Result<StereotypeIcon, ParseError> {
        let name = self.expect_word("icon name")?;
        let mut icon = StereotypeIcon::new(name.into_text(), header.pos().clone());

        self.parse_block(|parser, keyword, token| {
            parser.parse_icon_property(&mut icon, keyword, &token)
        })?;

        if icon.id.is_empty() {
            return Err(GrammarError::new("missing id", icon.pos).into());
        }
        Ok(icon)
    }

    fn parse_icon_property(
        &mut self,
        icon: &mut StereotypeIcon,
        keyword: Keyword,
        token: &DefToken,
    ) -> Result<(), ParseError> {
        match keyword {
            Keyword::Id => icon.id = self.property_value(|p| p.expect_word("icon id"))?.into_text(),
            Keyword::Title => icon.title = self.property_value(|p| p.expect_string("title"))?,
            Keyword::Elements => {
                let elements = self.property_value(|p| p.parse_list::<ElementType>("element"))?;
                icon.elements.extend(elements);
            }
            Keyword::Stereotype => {
                let stereotype = self.property_value(|p| p.expect_string("stereotype"))?;
                icon.stereotypes.insert(stereotype);
            }
            Keyword::Width => icon.width = self.property_value(|p| p.expect_number("width"))?,
            Keyword::Height => icon.height = self.property_value(|p| p.expect_number("height"))?,
            Keyword::MinWidth => {
                icon.min_width = Some(self.property_value(|p| p.expect_number("minimum width"))?);
            }
            Keyword::MinHeight => {
                icon.min_height = Some(self.property_value(|p| p.expect_number("minimum height"))?);
            }
            Keyword::LockSize => {
                icon.size_lock = self.property_value(|p| p.parse_value("size lock"))?;
            }
            Keyword::Display => icon.display = self.property_value(|p| p.parse_value("display"))?,
            Keyword::TextAlignment => {
                icon.text_alignment = self.property_value(|p| p.parse_value("text alignment"))?;
            }
            Keyword::BaseColor => icon.base_color = Some(self.property_value(Self::expect_color)?),
            Keyword::Shape => icon.icon_shape = self.parse_shape()?,
            Keyword::Outline => icon.outline_shape = Some(self.parse_shape()?),
            _ => return Err(unknown_property(token)),
        }
        Ok(())
    }

    /// Parses `{ ShapeCmd* }`.
    fn parse_shape(&mut self) -> Result<IconShape, ParseError> {
        let mut shape = IconShape::new();
        self.parse_block(|parser, keyword, token| {
            shape.push(parser.parse_shape_command(keyword, &token)?);
            Ok(())
        })?;
        Ok(shape)
    }

    fn parse_shape_command(
        &mut self,
        command: Keyword,
        token: &DefToken,
    ) -> Result<ShapeCommand, ParseError> {
        if command == Keyword::Close {
            self.parse_optional_empty_block()?;
            return Ok(ShapeCommand::Close);
        }
        let Some(parameters) = shape_parameters(command) else {
            return Err(unknown_property(token));
        };

        let mut arguments = ShapeArguments::new(command, token.pos().clone());
        self.parse_block(|parser, parameter, parameter_token| {
            if !parameters.contains(&parameter) {
                return Err(GrammarError::new(
                    format!(
                        "unexpected parameter '{}' for {}",
                        parameter_token.text(),
                        command.as_str()
                    ),
                    parameter_token.pos().clone(),
                )
                .into());
            }
            let value = parser.property_value(|p| p.expect_number(parameter.as_str()))?;
            arguments.insert(parameter, value, &parameter_token)
        })?;
        arguments.build(token)
    }
}

/// Returns the parameters of a shape command, or `None` if `command` is not
/// a shape command.
pub(crate) fn shape_parameters(command: Keyword) -> Option<&'static [Keyword]> {
    use Keyword::{
        Arc, ArcMoveTo, ArcTo, Circle, Close, Ellipse, Height, Line, LineTo, MoveTo, Radius,
        RadiusX, RadiusY, Rect, RoundedRect, Span, Start, Width, X, X0, X1, Y, Y0, Y1,
    };
    let parameters: &'static [Keyword] = match command {
        Circle => &[X, Y, Radius],
        Ellipse => &[X, Y, RadiusX, RadiusY],
        Line => &[X0, Y0, X1, Y1],
        Rect => &[X, Y, Width, Height],
        RoundedRect => &[X, Y, Width, Height, Radius],
        Arc | ArcTo => &[X, Y, RadiusX, RadiusY, Start, Span],
        MoveTo | LineTo => &[X, Y],
        ArcMoveTo => &[X, Y, RadiusX, RadiusY, Start],
        Close => &[],
        _ => return None,
    };
    Some(parameters)
}

/// Assigns the unit of a parameter: angles are absolute, everything else is
/// in icon coordinates.
fn shape_value(parameter: Keyword, value: f64) -> ShapeValue {
    match parameter {
        Keyword::Start | Keyword::Span => ShapeValue::absolute(value),
        _ => ShapeValue::scaled(value),
    }
}

/// Rejects any value that is not absolute with a smart origin.
fn expect_absolute_value(value: ShapeValue, pos: &SourcePos) -> Result<ShapeValue, ParseError> {
    if value.is_absolute() {
        Ok(value)
    } else {
        Err(GrammarError::new("expected an absolute value", pos.clone()).into())
    }
}

/// Parameters collected for one shape command.
struct ShapeArguments {
    command: Keyword,
    pos: SourcePos,
    values: Vec<(Keyword, ShapeValue, SourcePos)>,
}

impl ShapeArguments {
    fn new(command: Keyword, pos: SourcePos) -> Self {
        Self {
            command,
            pos,
            values: Vec::new(),
        }
    }

    fn insert(&mut self, parameter: Keyword, value: f64, token: &DefToken) -> Result<(), ParseError> {
        if self.values.iter().any(|(p, _, _)| *p == parameter) {
            return Err(GrammarError::new(
                format!(
                    "duplicate parameter '{}' for {}",
                    token.text(),
                    self.command.as_str()
                ),
                token.pos().clone(),
            )
            .into());
        }
        self.values
            .push((parameter, shape_value(parameter, value), token.pos().clone()));
        Ok(())
    }

    fn get(&self, parameter: Keyword) -> Result<ShapeValue, ParseError> {
        self.values
            .iter()
            .find(|(p, _, _)| *p == parameter)
            .map(|(_, value, _)| *value)
            .ok_or_else(|| {
                GrammarError::new(
                    format!(
                        "missing parameter '{}' for {}",
                        parameter.as_str(),
                        self.command.as_str()
                    ),
                    self.pos.clone(),
                )
                .into()
            })
    }

    /// Returns an angle parameter, which must be absolute.
    fn angle(&self, parameter: Keyword) -> Result<ShapeValue, ParseError> {
        let value = self.get(parameter)?;
        let pos = self
            .values
            .iter()
            .find(|(p, _, _)| *p == parameter)
            .map_or(&self.pos, |(_, _, pos)| pos);
        expect_absolute_value(value, pos)
    }

    fn build(&self, token: &DefToken) -> Result<ShapeCommand, ParseError> {
        use Keyword as K;
        let command = match self.command {
            K::Circle => ShapeCommand::Circle {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                radius: self.get(K::Radius)?,
            },
            K::Ellipse => ShapeCommand::Ellipse {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                radius_x: self.get(K::RadiusX)?,
                radius_y: self.get(K::RadiusY)?,
            },
            K::Line => ShapeCommand::Line {
                x0: self.get(K::X0)?,
                y0: self.get(K::Y0)?,
                x1: self.get(K::X1)?,
                y1: self.get(K::Y1)?,
            },
            K::Rect => ShapeCommand::Rect {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                width: self.get(K::Width)?,
                height: self.get(K::Height)?,
            },
            K::RoundedRect => ShapeCommand::RoundedRect {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                width: self.get(K::Width)?,
                height: self.get(K::Height)?,
                radius: self.get(K::Radius)?,
            },
            K::Arc => ShapeCommand::Arc {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                radius_x: self.get(K::RadiusX)?,
                radius_y: self.get(K::RadiusY)?,
                start: self.angle(K::Start)?,
                span: self.angle(K::Span)?,
            },
            K::MoveTo => ShapeCommand::MoveTo {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
            },
            K::LineTo => ShapeCommand::LineTo {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
            },
            K::ArcMoveTo => ShapeCommand::ArcMoveTo {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                radius_x: self.get(K::RadiusX)?,
                radius_y: self.get(K::RadiusY)?,
                start: self.angle(K::Start)?,
            },
            K::ArcTo => ShapeCommand::ArcTo {
                x: self.get(K::X)?,
                y: self.get(K::Y)?,
                radius_x: self.get(K::RadiusX)?,
                radius_y: self.get(K::RadiusY)?,
                start: self.angle(K::Start)?,
                span: self.angle(K::Span)?,
            },
            K::Close => ShapeCommand::Close,
            _ => return Err(unknown_property(token)),
        };
        Ok(command)
    }
}
