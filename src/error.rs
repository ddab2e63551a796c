use thiserror::Error;

/// Errors raised while validating a Grid before any search work begins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
	/// `height` or `width` is zero
	#[error("Grid must have nonzero dimensions (got {height}x{width})")]
	InvalidDimensions {
		/// the requested number of rows
		height: usize,
		/// the requested number of columns
		width: usize,
	},

	/// the number of rows does not match `height`
	#[error("expected {expected} rows, found {found}")]
	HeightMismatch {
		/// the requested number of rows
		expected: usize,
		/// the number of rows actually provided
		found: usize,
	},

	/// a row does not have exactly `width` cells
	#[error("row {row} has {found} cells, expected {expected}")]
	RowLength {
		/// index of the offending row
		row: usize,
		/// the requested number of columns
		expected: usize,
		/// the number of cells in that row
		found: usize,
	},

	/// the Costs of all Tiles added up do not fit into a [`Cost`](crate::Cost)
	#[error("the total Cost of the Grid overflows")]
	CostOverflow,
}

/// A shorthand for Results with a [`SolveError`]
pub type Result<T> = std::result::Result<T, SolveError>;
