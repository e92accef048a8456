use super::renderer::{Renderer, RendererError};
use super::style::{ElementColorMap, StyleSpec};
use crate::core::color::HexColor;
use crate::core::models::atom::AtomRecord;
use crate::core::models::structure::StructureFormat;

/// Everything a [`RecordingRenderer`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddModel(StructureFormat),
    SetStyle(usize, StyleSpec),
    SetColorByElement(usize, ElementColorMap),
    SetBackground(HexColor),
    ZoomTo,
    Zoom(f64),
    Render,
    RemoveAllModels,
}

/// A renderer double that "parses" structures as one element symbol per line and records
/// every call.
///
/// A line `O 1 2` is an oxygen bonded to atoms 1 and 2. Content containing `!reject` is
/// refused. Setting `fail_snapshots` makes every PNG capture fail.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
    pub fail_snapshots: bool,
    models: Vec<Vec<AtomRecord>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

impl Renderer for RecordingRenderer {
    type Model = usize;

    fn add_model(
        &mut self,
        content: &str,
        format: StructureFormat,
    ) -> Result<Self::Model, RendererError> {
        self.calls.push(Call::AddModel(format));
        if content.contains("!reject") {
            return Err(RendererError::Rejected("malformed record".to_string()));
        }
        let atoms = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let mut fields = line.split_whitespace();
                let element = fields.next().unwrap_or_default();
                let bonds = fields.filter_map(|f| f.parse().ok());
                AtomRecord::new(element).with_bonds(bonds)
            })
            .collect();
        self.models.push(atoms);
        Ok(self.models.len() - 1)
    }

    fn selected_atoms(&self, model: &Self::Model) -> Vec<AtomRecord> {
        self.models.get(*model).cloned().unwrap_or_default()
    }

    fn set_style(&mut self, model: &Self::Model, style: &StyleSpec) {
        self.calls.push(Call::SetStyle(*model, style.clone()));
    }

    fn set_color_by_element(&mut self, model: &Self::Model, colors: &ElementColorMap) {
        self.calls.push(Call::SetColorByElement(*model, colors.clone()));
    }

    fn set_background(&mut self, color: HexColor) {
        self.calls.push(Call::SetBackground(color));
    }

    fn zoom_to(&mut self) {
        self.calls.push(Call::ZoomTo);
    }

    fn zoom(&mut self, factor: f64) {
        self.calls.push(Call::Zoom(factor));
    }

    fn render(&mut self) {
        self.calls.push(Call::Render);
    }

    fn remove_all_models(&mut self) {
        self.calls.push(Call::RemoveAllModels);
        self.models.clear();
    }

    fn png_data_url(&self) -> Result<String, RendererError> {
        if self.fail_snapshots {
            return Err(RendererError::Snapshot("canvas unavailable".to_string()));
        }
        Ok(format!("data:image/png;base64,frame{}", self.calls.len()))
    }
}
