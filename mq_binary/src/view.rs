use crate::errors::ProtocolError;
use crate::errors::Result;
use crate::types::MQLONG;

/// A `#[repr(C)]` MQ structure that can be viewed as its memory image.
///
/// # Safety
///
/// Implementors must:
/// - be `#[repr(C)]` with no implicit padding, so every byte of the image is initialised
/// - consist only of integers, `MQCHAR` arrays and raw pointers, so any byte pattern is a valid value
/// - start with the four `StrucId` characters when `STRUC_ID` is `Some`
pub unsafe trait MqStruct: Copy + 'static {
    /// The C name of the structure, e.g. `MQMD`.
    const NAME: &'static str;

    /// Leading eye-catcher, when the structure carries one.
    const STRUC_ID: Option<[u8; 4]> = None;

    const SIZE: usize = std::mem::size_of::<Self>();

    /// The structure's numeric `Version` field, when it has one.
    fn version(&self) -> Option<MQLONG> {
        None
    }

    fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self as *const Self as *const u8, Self::SIZE) }
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// # Safety
    ///
    /// The caller must ensure:
    /// - `bytes.len() >= Self::SIZE`
    /// - `bytes.as_ptr()` is aligned to `align_of::<Self>()`
    unsafe fn from_bytes_unchecked(bytes: &[u8]) -> &Self {
        debug_assert!(bytes.len() >= Self::SIZE);
        debug_assert!((bytes.as_ptr() as usize).is_multiple_of(std::mem::align_of::<Self>()));
        unsafe { &*(bytes.as_ptr() as *const Self) }
    }

    /// Copies a structure out of `bytes`, which need not be aligned.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(ProtocolError::InvalidLength { expected: Self::SIZE, actual: bytes.len() });
        }

        if let Some(expected) = Self::STRUC_ID {
            if bytes[..4] != expected {
                return Err(ProtocolError::InvalidStrucId {
                    structure: Self::NAME,
                    expected: String::from_utf8_lossy(&expected).into_owned(),
                    actual: String::from_utf8_lossy(&bytes[..4]).into_owned(),
                });
            }
        }

        Ok(unsafe { std::ptr::read_unaligned(bytes.as_ptr() as *const Self) })
    }

    /// Borrows a structure in place, checking length and alignment.
    fn view(bytes: &[u8]) -> Result<&Self> {
        if bytes.len() < Self::SIZE {
            return Err(ProtocolError::InvalidLength { expected: Self::SIZE, actual: bytes.len() });
        }

        let align = std::mem::align_of::<Self>();
        if !(bytes.as_ptr() as usize).is_multiple_of(align) {
            return Err(ProtocolError::InvalidAlignment { address: bytes.as_ptr() as usize, align });
        }

        Ok(unsafe { Self::from_bytes_unchecked(bytes) })
    }
}
