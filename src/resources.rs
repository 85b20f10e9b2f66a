//! The program image resources of the machine.
use crate::{
    definitions::{cpu, memory},
    LoadError,
};

/// The largest program image that fits into the program area of the ram.
pub const MAX_PROGRAM_SIZE: usize = memory::SIZE - cpu::PROGRAM_COUNTER;

/// Represents a single validated program image with its information.
///
/// Where the image comes from (a file, an archive, a network) is the
/// business of the host; by the time a [`Rom`] exists the bytes are known
/// to fit into the machine, so loading can not fail later on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rom {
    /// The rom name
    name: String,
    /// The image data stored as a u8 slice on the heap
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given raw image bytes.
    ///
    /// Fails with a [`LoadError`] if the image is empty or exceeds
    /// [`MAX_PROGRAM_SIZE`].
    pub fn new<D>(name: &str, data: D) -> Result<Self, LoadError>
    where
        D: Into<Box<[u8]>>,
    {
        let data = data.into();
        if data.is_empty() {
            return Err(LoadError::EmptyImage);
        }
        if data.len() > MAX_PROGRAM_SIZE {
            return Err(LoadError::ImageTooLarge {
                size: data.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        Ok(Rom {
            name: name.to_string(),
            data,
        })
    }

    /// Will return a slice of the internal values of the given data.
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}
