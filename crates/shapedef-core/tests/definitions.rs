// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parses a realistic definition file with several icons and toolbars.

use shapedef_core::model::{
    Color, DisplayMode, ElementType, ShapeCommand, ShapeValue, SizeLock, TextAlignment, Tool,
    ToolElement,
};
use shapedef_core::prelude::*;

const STANDARD: &str = r#"// Standard icons and toolbars

icon Interface {
  id: std_interface
  title: "Interface"
  elements: class, component
  stereotype: "interface"
  width: 20; height: 20
  locksize: size
  display: icon
  textalignment: below
  shape {
    circle { x: 10; y: 10; radius: 10 }
  }
}

icon Actor
{
  id: std_actor
  title: "Actor"
  elements: class
  stereotype: "actor"
  width: 20
  height: 40
  minwidth: 10
  minheight: 20
  locksize: ratio
  basecolor: #FFE0A0
  shape {
    // head
    circle { x: 10; y: 6; radius: 6 }
    // body
    line { x0: 10; y0: 12; x1: 10; y1: 28 }
    // arms
    line { x0: 0; y0: 18; x1: 20; y1: 18 }
    // legs
    moveto { x: 0; y: 40 }
    lineto { x: 10; y: 28 }
    lineto { x: 20; y: 40 }
  }
}

icon Database {
  id: std_database
  title: "Database"
  elements: component, item
  stereotype: "database"
  stereotype: "db"
  width: 30; height: 40
  display: smart
  textalignment: center
  shape {
    arcmoveto { x: 15; y: 5; radiusx: 15; radiusy: 5; start: 180 }
    arcto { x: 15; y: 5; radiusx: 15; radiusy: 5; start: 180; span: 360 }
    lineto { x: 30; y: 35 }
    arcto { x: 15; y: 35; radiusx: 15; radiusy: 5; start: 0; span: -180 }
    close
  }
  outline {
    rect { x: 0; y: 0; width: 30; height: 40 }
  }
}

toolbar Standard {
  id: std_toolbar
  priority: 100
  tools {
    tool { title: "Interface"; element: class; stereotype: "interface" }
    tool { title: "Actor"; element: class; stereotype: "actor" }
    separator
    tool {
      title: "Database"
      element: component
      stereotype: "database"
    }
  }
}

toolbar Extras { id: std_extras; priority: -1 }
"#;

#[test]
fn parses_standard_definitions() {
    let definitions = parse_definitions("standard.def", STANDARD).expect("standard.def parses");

    assert_eq!(definitions.icons.len(), 3);
    assert_eq!(definitions.toolbars.len(), 2);

    let ids: Vec<_> = definitions.icons.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["std_interface", "std_actor", "std_database"]);
}

#[test]
fn interface_icon() {
    let definitions = parse_definitions("standard.def", STANDARD).expect("parses");
    let interface = &definitions.icons[0];
    assert_eq!(interface.name, "Interface");
    assert_eq!(interface.pos.line(), 3);
    assert!(interface.has_stereotype("interface"));
    assert!(interface.applies_to(ElementType::Class));
    assert!(interface.applies_to(ElementType::Component));
    assert_eq!(interface.size_lock, SizeLock::Size);
    assert_eq!(interface.display, DisplayMode::Icon);
    assert_eq!(interface.text_alignment, TextAlignment::Below);
    assert_eq!(interface.icon_shape.len(), 1);
}

#[test]
fn actor_icon() {
    let definitions = parse_definitions("standard.def", STANDARD).expect("parses");
    let actor = &definitions.icons[1];
    assert_eq!(actor.min_width, Some(10.0));
    assert_eq!(actor.min_height, Some(20.0));
    assert_eq!(actor.base_color, Some(Color::rgb(0xff, 0xe0, 0xa0)));
    let names: Vec<_> = actor.icon_shape.iter().map(ShapeCommand::name).collect();
    assert_eq!(
        names,
        vec!["circle", "line", "line", "moveto", "lineto", "lineto"]
    );
    assert!(actor.outline_shape.is_none());
}

#[test]
fn database_icon() {
    let definitions = parse_definitions("standard.def", STANDARD).expect("parses");
    let database = &definitions.icons[2];
    assert_eq!(database.stereotypes.len(), 2);
    assert_eq!(database.icon_shape.len(), 5);
    assert_eq!(
        database.icon_shape.commands()[3],
        ShapeCommand::ArcTo {
            x: ShapeValue::scaled(15.0),
            y: ShapeValue::scaled(35.0),
            radius_x: ShapeValue::scaled(15.0),
            radius_y: ShapeValue::scaled(5.0),
            start: ShapeValue::absolute(0.0),
            span: ShapeValue::absolute(-180.0),
        }
    );
    assert_eq!(
        database.icon_shape.commands().last(),
        Some(&ShapeCommand::Close)
    );
    assert_eq!(database.outline_shape.as_ref().map(IconShape::len), Some(1));
}

#[test]
fn toolbars() {
    let definitions = parse_definitions("standard.def", STANDARD).expect("parses");
    let standard = &definitions.toolbars[0];
    assert_eq!(standard.id, "std_toolbar");
    assert_eq!(standard.priority, 100);
    assert_eq!(standard.tools.len(), 4);
    assert_eq!(standard.tool_count(), 3);
    assert_eq!(standard.tools[2], Tool::Separator);
    assert_eq!(
        standard.tools[3],
        Tool::Element {
            title: "Database".into(),
            element: ToolElement::Component,
            stereotype: Some("database".into()),
        }
    );

    let extras = &definitions.toolbars[1];
    assert_eq!(extras.priority, -1);
    assert!(extras.tools.is_empty());
}

#[test]
fn streaming_handler_sees_every_definition() {
    #[derive(Default)]
    struct Counter {
        icons: usize,
        toolbars: usize,
    }

    impl DefinitionHandler for Counter {
        fn icon_parsed(&mut self, _icon: StereotypeIcon) {
            self.icons += 1;
        }

        fn toolbar_parsed(&mut self, _toolbar: Toolbar) {
            self.toolbars += 1;
        }
    }

    let mut counter = Counter::default();
    DefinitionParser::new()
        .parse(StringSource::new("standard.def", STANDARD), &mut counter)
        .expect("parses");
    assert_eq!((counter.icons, counter.toolbars), (3, 2));
}

#[test]
fn error_after_valid_definitions_reports_position() {
    let text = format!("{STANDARD}\nicon Broken {{\n  id: broken\n  shape {{ circle {{ x: 1 }} }}\n}}\n");
    let err = parse_definitions("standard.def", text).expect_err("broken icon");
    assert_eq!(err.to_string(), "missing parameter 'y' for circle");
    assert_eq!(err.pos().source_id(), "standard.def");
    assert_eq!(err.pos().column(), Some(11));
}
