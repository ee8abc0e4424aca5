//! Tensor container handed to learning code.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[planes, height, width]` for board encoders.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index.
    pub fn set(&mut self, index: usize, value: f32) {
        if index < self.tensor.len() {
            self.tensor[index] = value;
        }
    }

    /// Slice of one leading-axis plane.
    #[must_use]
    pub fn plane(&self, index: usize) -> Option<&[f32]> {
        let stride: usize = self.shape.iter().skip(1).product();
        let start = index.checked_mul(stride)?;
        self.tensor.get(start..start + stride)
    }

    /// Mutable slice of one leading-axis plane.
    pub fn plane_mut(&mut self, index: usize) -> Option<&mut [f32]> {
        let stride: usize = self.shape.iter().skip(1).product();
        let start = index.checked_mul(stride)?;
        self.tensor.get_mut(start..start + stride)
    }
}
