//! Structured-document codec for the recipe catalog.
//!
//! Format:
//!
//! ```xml
//! <recipes>
//!   <recipe>
//!     <title>..</title>
//!     <about>..</about>
//!     <ingredients><ingredient>..</ingredient></ingredients>
//!     <instructions>..</instructions>
//!     <image>data:image/png;base64,..</image>
//!   </recipe>
//! </recipes>
//! ```
//!
//! Parsing checks well-formedness only. Missing fields read as empty strings and
//! an empty `image` element reads as absent.

use crate::error::DocumentError;
use crate::types::Recipe;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

const ROOT: &str = "recipes";
const RECIPE: &str = "recipe";
const TITLE: &str = "title";
const ABOUT: &str = "about";
const INGREDIENTS: &str = "ingredients";
const INGREDIENT: &str = "ingredient";
const INSTRUCTIONS: &str = "instructions";
const IMAGE: &str = "image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    About,
    Instructions,
    Image,
    Ingredient,
}

/// Text being collected for one field element.
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

#[derive(Default)]
struct PartialRecipe {
    title: Option<String>,
    about: Option<String>,
    instructions: Option<String>,
    image: Option<String>,
    ingredients: Vec<String>,
}

impl PartialRecipe {
    fn slot(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::About => Some(&mut self.about),
            Field::Instructions => Some(&mut self.instructions),
            Field::Image => Some(&mut self.image),
            Field::Ingredient => None,
        }
    }

    /// First occurrence of a field wins.
    fn wants(&mut self, field: Field) -> bool {
        self.slot(field).is_none_or(|slot| slot.is_none())
    }

    fn fill(&mut self, field: Field, text: String) {
        match self.slot(field) {
            Some(slot) => {
                if slot.is_none() {
                    *slot = Some(text);
                }
            }
            None => self.ingredients.push(text),
        }
    }

    fn finish(self) -> Recipe {
        Recipe {
            title: self.title.unwrap_or_default(),
            about: self.about.unwrap_or_default(),
            ingredients: self.ingredients,
            instructions: self.instructions.unwrap_or_default(),
            image: self.image.filter(|image| !image.is_empty()),
        }
    }
}

/// Parser state while walking the event stream.
#[derive(Default)]
struct Walker {
    depth: usize,
    root_seen: bool,
    root_closed: bool,
    recipe: Option<(usize, PartialRecipe)>,
    ingredients_depth: Option<usize>,
    capture: Option<Capture>,
    recipes: Vec<Recipe>,
}

impl Walker {
    fn field_for(&self, name: &[u8]) -> Option<Field> {
        match name {
            n if n == TITLE.as_bytes() => Some(Field::Title),
            n if n == ABOUT.as_bytes() => Some(Field::About),
            n if n == INSTRUCTIONS.as_bytes() => Some(Field::Instructions),
            n if n == IMAGE.as_bytes() => Some(Field::Image),
            n if n == INGREDIENT.as_bytes() && self.ingredients_depth.is_some() => {
                Some(Field::Ingredient)
            }
            _ => None,
        }
    }

    fn open(&mut self, name: &[u8]) -> Result<(), DocumentError> {
        if self.root_closed {
            return Err(DocumentError::Malformed(
                "more than one root element".to_string(),
            ));
        }
        self.depth += 1;
        self.root_seen = true;

        if self.capture.is_some() {
            // Nested markup inside a field contributes its text only.
            return Ok(());
        }

        if self.recipe.is_none() {
            if name == RECIPE.as_bytes() {
                self.recipe = Some((self.depth, PartialRecipe::default()));
            }
            return Ok(());
        }

        if name == INGREDIENTS.as_bytes() && self.ingredients_depth.is_none() {
            self.ingredients_depth = Some(self.depth);
            return Ok(());
        }

        if let Some(field) = self.field_for(name)
            && let Some((_, partial)) = self.recipe.as_mut()
            && partial.wants(field)
        {
            self.capture = Some(Capture {
                field,
                depth: self.depth,
                text: String::new(),
            });
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), DocumentError> {
        if self.depth == 0 {
            return Err(DocumentError::Malformed(
                "closing tag without matching opening tag".to_string(),
            ));
        }

        if self.capture.as_ref().is_some_and(|c| c.depth == self.depth)
            && let Some(capture) = self.capture.take()
            && let Some((_, partial)) = self.recipe.as_mut()
        {
            partial.fill(capture.field, capture.text);
        }

        if self.ingredients_depth == Some(self.depth) {
            self.ingredients_depth = None;
        }

        if self.recipe.as_ref().is_some_and(|(depth, _)| *depth == self.depth)
            && let Some((_, partial)) = self.recipe.take()
        {
            self.recipes.push(partial.finish());
        }

        self.depth -= 1;
        if self.depth == 0 {
            self.root_closed = true;
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), DocumentError> {
        if self.depth == 0 {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(DocumentError::Malformed(
                "text outside the root element".to_string(),
            ));
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Recipe>, DocumentError> {
        if self.depth != 0 {
            return Err(DocumentError::Malformed("unclosed element".to_string()));
        }
        if !self.root_seen {
            return Err(DocumentError::Malformed("no root element".to_string()));
        }
        Ok(self.recipes)
    }
}

/// Parses a recipe document. Either every recipe is returned in document order
/// or the whole document is rejected.
pub fn parse(text: &str) -> Result<Vec<Recipe>, DocumentError> {
    let mut reader = Reader::from_str(text);
    let mut walker = Walker::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            DocumentError::Malformed(format!("at byte {}: {e}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => walker.open(e.name().as_ref())?,
            Event::End(_) => walker.close()?,
            Event::Empty(e) => {
                walker.open(e.name().as_ref())?;
                walker.close()?;
            }
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| DocumentError::Malformed(e.to_string()))?;
                walker.text(&text)?;
            }
            Event::CData(c) => {
                if walker.depth == 0 {
                    return Err(DocumentError::Malformed(
                        "CDATA outside the root element".to_string(),
                    ));
                }
                let text = std::str::from_utf8(&c)
                    .map_err(|e| DocumentError::Malformed(e.to_string()))?;
                walker.text(text)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }

    walker.finish()
}

/// Serializes recipes under a `recipes` root without indentation, so that
/// [`parse`] returns the input, except that an empty image reads back as `None`.
pub fn write<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Result<String, DocumentError> {
    let mut writer = Writer::new(Vec::new());

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    emit(&mut writer, Event::Start(BytesStart::new(ROOT)))?;
    for recipe in recipes {
        emit(&mut writer, Event::Start(BytesStart::new(RECIPE)))?;
        write_text_element(&mut writer, TITLE, &recipe.title)?;
        write_text_element(&mut writer, ABOUT, &recipe.about)?;
        emit(&mut writer, Event::Start(BytesStart::new(INGREDIENTS)))?;
        for ingredient in &recipe.ingredients {
            write_text_element(&mut writer, INGREDIENT, ingredient)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new(INGREDIENTS)))?;
        write_text_element(&mut writer, INSTRUCTIONS, &recipe.instructions)?;
        if let Some(image) = recipe.image.as_deref().filter(|image| !image.is_empty()) {
            write_text_element(&mut writer, IMAGE, image)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new(RECIPE)))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new(ROOT)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| DocumentError::Write(e.to_string()))
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), DocumentError> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    if !text.is_empty() {
        emit(writer, Event::Text(BytesText::new(text)))?;
    }
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Write(e.to_string()))
}
