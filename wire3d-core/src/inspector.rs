/// Read and write the selected object's transform, one scalar at a time
use std::fmt;

use tracing::warn;

use crate::error::{self, InspectorError};
use crate::scene::SceneState;
use crate::transform::Transform;

/// One of the nine scalars of a [`Transform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformField {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    ScaleX,
    ScaleY,
    ScaleZ,
}

impl TransformField {
    /// Panel order: position, rotation, scale
    pub const ALL: [TransformField; 9] = [
        TransformField::PositionX,
        TransformField::PositionY,
        TransformField::PositionZ,
        TransformField::RotationX,
        TransformField::RotationY,
        TransformField::RotationZ,
        TransformField::ScaleX,
        TransformField::ScaleY,
        TransformField::ScaleZ,
    ];

    /// Host-facing name, e.g. `posX` or `scaleZ`
    pub fn name(self) -> &'static str {
        match self {
            TransformField::PositionX => "posX",
            TransformField::PositionY => "posY",
            TransformField::PositionZ => "posZ",
            TransformField::RotationX => "rotX",
            TransformField::RotationY => "rotY",
            TransformField::RotationZ => "rotZ",
            TransformField::ScaleX => "scaleX",
            TransformField::ScaleY => "scaleY",
            TransformField::ScaleZ => "scaleZ",
        }
    }

    pub fn parse(name: &str) -> Result<Self, InspectorError> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| InspectorError::UnknownField(name.to_string()))
    }

    pub fn get(self, transform: &Transform) -> f64 {
        let mut copy = *transform;
        *self.slot(&mut copy)
    }

    fn slot(self, transform: &mut Transform) -> &mut f64 {
        match self {
            TransformField::PositionX => &mut transform.position.x,
            TransformField::PositionY => &mut transform.position.y,
            TransformField::PositionZ => &mut transform.position.z,
            TransformField::RotationX => &mut transform.rotation.x,
            TransformField::RotationY => &mut transform.rotation.y,
            TransformField::RotationZ => &mut transform.rotation.z,
            TransformField::ScaleX => &mut transform.scale.x,
            TransformField::ScaleY => &mut transform.scale.y,
            TransformField::ScaleZ => &mut transform.scale.z,
        }
    }
}

impl fmt::Display for TransformField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All nine scalars of a transform in [`TransformField::ALL`] order
pub fn transform_values(transform: &Transform) -> [f64; 9] {
    TransformField::ALL.map(|field| field.get(transform))
}

impl SceneState {
    /// The selected object's transform, for display
    pub fn inspect(&self) -> Option<Transform> {
        self.selected_object().map(|object| object.transform)
    }

    /// Write one scalar into the selected object's transform.
    ///
    /// Non-finite values are rejected and leave the transform untouched.
    pub fn set_field(&mut self, field: TransformField, value: f64) -> Result<(), InspectorError> {
        if !value.is_finite() {
            warn!(%field, value, "rejected non-finite inspector value");
            return Err(InspectorError::NonFinite { field, value });
        }
        let object = self
            .selected_object_mut()
            .ok_or(InspectorError::NoSelection)?;
        *field.slot(&mut object.transform) = value;
        Ok(())
    }

    /// Parse `input` and write it into the selected object's transform
    pub fn set_field_str(&mut self, field: TransformField, input: &str) -> Result<(), InspectorError> {
        let value = input.trim().parse::<f64>().map_err(|_| {
            warn!(%field, input, "rejected unparsable inspector value");
            InspectorError::Parse {
                field,
                input: input.to_string(),
            }
        })?;
        self.set_field(field, value)
    }

    /// Write a details-panel input by its host name (`posX` ... `scaleZ`)
    pub fn set_named_field(&mut self, name: &str, input: &str) -> error::Result<()> {
        let field = TransformField::parse(name)?;
        self.set_field_str(field, input)?;
        Ok(())
    }
}
