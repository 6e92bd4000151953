//! Interactive prompts for collecting field values.
//!
//! Each inferred field prompts with the widget its kind calls for: text-ish
//! kinds use a free-text input, selects offer their options list, checkboxes
//! confirm yes/no. Batch mode (or a non-terminal stdin) skips prompting
//! entirely; fields left unfilled stay as literal placeholders in the
//! output.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use legidoc_core::fields::{FieldDescriptor, FieldKind};
use legidoc_core::template::{FormValue, FormValues};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt (CI/scripting).
    pub batch_mode: bool,
}

/// Error type for value collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Collect values for the given fields, prompting for any not already
/// provided.
///
/// Provided values always win; prompting only fills gaps. A blank answer to
/// a text prompt leaves the field unfilled (silent pass-through applies at
/// render time).
pub fn collect_values(
    fields: &[FieldDescriptor],
    provided: &FormValues,
    options: &PromptOptions,
) -> Result<FormValues, PromptError> {
    let mut values = provided.clone();

    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    if !is_interactive {
        return Ok(values);
    }

    for field in fields {
        if values.contains_key(&field.name) {
            continue;
        }
        if let Some(value) = prompt_field(field)? {
            values.insert(field.name.clone(), value);
        }
    }

    Ok(values)
}

fn prompt_field(field: &FieldDescriptor) -> Result<Option<FormValue>, PromptError> {
    let theme = ColorfulTheme::default();
    let prompt_text = field.placeholder.as_deref().unwrap_or(&field.label);

    match field.kind {
        FieldKind::Select => {
            let items = field.options.as_deref().unwrap_or(&[]);
            if items.is_empty() {
                return Ok(None);
            }
            let index = Select::with_theme(&theme)
                .with_prompt(prompt_text)
                .items(items)
                .default(0)
                .interact()
                .map_err(dialoguer_error_to_prompt_error)?;
            Ok(Some(FormValue::Text(items[index].clone())))
        }
        FieldKind::Checkbox => {
            let answer = Confirm::with_theme(&theme)
                .with_prompt(prompt_text)
                .default(false)
                .interact()
                .map_err(dialoguer_error_to_prompt_error)?;
            Ok(Some(FormValue::Flag(answer)))
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Textarea | FieldKind::Date => {
            let answer: String = Input::with_theme(&theme)
                .with_prompt(prompt_text)
                .allow_empty(true)
                .interact_text()
                .map_err(dialoguer_error_to_prompt_error)?;
            if answer.is_empty() {
                Ok(None)
            } else {
                Ok(Some(FormValue::Text(answer)))
            }
        }
    }
}

fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            PromptError::Cancelled
        }
        dialoguer::Error::IO(io_err) => PromptError::Io(io_err),
    }
}
