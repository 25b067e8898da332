// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Toolbar definitions.
//!
//! ```text
//! ToolbarProp := "id" ":" Word
//!              | "priority" ":" ["-"] Integer
//!              | "tools" "{" Tool* "}"
//! Tool        := "tool" "{" ToolProp* "}"
//!              | "separator" ["{" "}"]
//! ToolProp    := "title" ":" String
//!              | "element" ":" Word
//!              | "stereotype" ":" String
//! ```

use super::{DefToken, DefinitionParser, GrammarError, Keyword, ParseError, unknown_property};
use crate::model::{Tool, ToolElement, Toolbar};

impl DefinitionParser {
    /// Parses the rest of a toolbar definition after the `toolbar` keyword.
    pub(super) fn parse_toolbar(&mut self, header: &DefToken) -> Result<Toolbar, ParseError> {
        let name = self.expect_word("toolbar name")?;
        let mut toolbar = Toolbar::new(name.into_text(), header.pos().clone());

        self.parse_block(|parser, keyword, token| {
            match keyword {
                Keyword::Id => {
                    toolbar.id = parser
                        .property_value(|p| p.expect_word("toolbar id"))?
                        .into_text();
                }
                Keyword::Priority => {
                    toolbar.priority = parser.property_value(|p| p.expect_integer("priority"))?;
                }
                Keyword::Tools => parser.parse_tools(&mut toolbar.tools)?,
                _ => return Err(unknown_property(&token)),
            }
            Ok(())
        })?;

        if toolbar.id.is_empty() {
            return Err(GrammarError::new("missing id", toolbar.pos).into());
        }
        Ok(toolbar)
    }

    /// Parses `{ Tool* }`, appending to `tools`.
    fn parse_tools(&mut self, tools: &mut Vec<Tool>) -> Result<(), ParseError> {
        self.parse_block(|parser, keyword, token| {
            match keyword {
                Keyword::Tool => tools.push(parser.parse_tool(&token)?),
                Keyword::Separator => {
                    parser.parse_optional_empty_block()?;
                    tools.push(Tool::Separator);
                }
                _ => return Err(unknown_property(&token)),
            }
            Ok(())
        })
    }

    fn parse_tool(&mut self, header: &DefToken) -> Result<Tool, ParseError> {
        let mut title = None;
        let mut element = None;
        let mut stereotype = None;

        self.parse_block(|parser, keyword, token| {
            match keyword {
                Keyword::Title => {
                    title = Some(parser.property_value(|p| p.expect_string("title"))?);
                }
                Keyword::Element => {
                    element = Some(
                        parser.property_value(|p| p.parse_value::<ToolElement>("tool element"))?,
                    );
                }
                Keyword::Stereotype => {
                    stereotype = Some(parser.property_value(|p| p.expect_string("stereotype"))?);
                }
                _ => return Err(unknown_property(&token)),
            }
            Ok(())
        })?;

        let title =
            title.ok_or_else(|| GrammarError::new("missing title", header.pos().clone()))?;
        let element =
            element.ok_or_else(|| GrammarError::new("missing element", header.pos().clone()))?;
        Ok(Tool::Element {
            title,
            element,
            stereotype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse_definitions;
    use super::*;

    fn parse_toolbar(text: &str) -> Toolbar {
        let mut definitions =
            parse_definitions("toolbar.def", text).expect("parse should succeed");
        assert_eq!(definitions.toolbars.len(), 1, "expected one toolbar");
        definitions.toolbars.remove(0)
    }

    fn parse_err(text: &str) -> ParseError {
        parse_definitions("toolbar.def", text).expect_err("parse should fail")
    }

    #[test]
    fn toolbar_with_tools() {
        let toolbar = parse_toolbar(
            r#"toolbar Standard {
                id: standard
                priority: 10
                tools {
                    tool { title: "Class"; element: class }
                    separator
                    tool {
                        title: "Interface"
                        element: Class
                        stereotype: "interface"
                    }
                    separator {}
                    tool { title: "Lane"; element: swimlane }
                }
            }"#,
        );
        assert_eq!(toolbar.name, "Standard");
        assert_eq!(toolbar.id, "standard");
        assert_eq!(toolbar.priority, 10);
        assert_eq!(
            toolbar.tools,
            vec![
                Tool::Element {
                    title: "Class".into(),
                    element: ToolElement::Class,
                    stereotype: None,
                },
                Tool::Separator,
                Tool::Element {
                    title: "Interface".into(),
                    element: ToolElement::Class,
                    stereotype: Some("interface".into()),
                },
                Tool::Separator,
                Tool::Element {
                    title: "Lane".into(),
                    element: ToolElement::Swimlane,
                    stereotype: None,
                },
            ]
        );
        assert_eq!(toolbar.tool_count(), 3);
    }

    #[test]
    fn default_priority() {
        assert_eq!(parse_toolbar("toolbar T { id: T }").priority, 0);
    }

    #[test]
    fn negative_priority() {
        assert_eq!(parse_toolbar("toolbar T { id: T; priority: -5 }").priority, -5);
    }

    #[test]
    fn priority_must_be_an_integer() {
        let err = parse_err("toolbar T { id: T; priority: 1.5 }");
        assert_eq!(err.to_string(), "expected priority, found '1.5'");
    }

    #[test]
    fn priority_out_of_range() {
        let err = parse_err("toolbar T { id: T; priority: 99999999999 }");
        assert_eq!(err.to_string(), "integer '99999999999' out of range");
    }

    #[test]
    fn tools_accumulate() {
        let toolbar = parse_toolbar(
            "toolbar T { id: T\n tools { separator }\n tools { tool { title: \"A\"; element: item } } }",
        );
        assert_eq!(toolbar.tools.len(), 2);
    }

    #[test]
    fn missing_toolbar_id() {
        let err = parse_err("toolbar T { priority: 1 }");
        assert_eq!(err.to_string(), "missing id");
        assert_eq!(err.pos().column(), Some(1));
    }

    #[test]
    fn missing_tool_title() {
        let err = parse_err("toolbar T { id: T; tools { tool { element: class } } }");
        assert_eq!(err.to_string(), "missing title");
        assert_eq!(err.pos().column(), Some(28));
    }

    #[test]
    fn missing_tool_element() {
        let err = parse_err("toolbar T { id: T; tools { tool { title: \"A\" } } }");
        assert_eq!(err.to_string(), "missing element");
    }

    #[test]
    fn unknown_tool_element() {
        let err = parse_err("toolbar T { id: T; tools { tool { title: \"A\"; element: diagram } } }");
        assert_eq!(err.to_string(), "unknown tool element 'diagram'");
    }

    #[test]
    fn unknown_toolbar_property() {
        let err = parse_err("toolbar T { id: T; width: 3 }");
        assert_eq!(err.to_string(), "unknown property 'width'");
    }

    #[test]
    fn icon_keyword_inside_tools() {
        let err = parse_err("toolbar T { id: T; tools { icon } }");
        assert_eq!(err.to_string(), "unknown property 'icon'");
    }
}
