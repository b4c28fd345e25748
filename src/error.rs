use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	#[display("Cannot write page '{path}' ({cause})")]
	IoWritePage { path: String, cause: std::io::Error },

	// -- Externals
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),
}

// region:    --- Constructors

impl Error {
	pub fn io_write_page(path: impl Into<String>, cause: std::io::Error) -> Self {
		Self::IoWritePage {
			path: path.into(),
			cause,
		}
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
