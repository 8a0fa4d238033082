//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
///
/// Width and height of the physical panel in pixels. The panel RAM is
/// organized in pages of 8 vertically stacked pixels, so a buffer covering
/// the panel holds `pages * width` bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns, one byte per column per page)
    pub width: u16,
    /// Height in pixels (rows, grouped into pages of 8)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-pixel pages covering the height
    pub fn pages(&self) -> u16 {
        self.height.div_ceil(8)
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        usize::from(self.pages()) * usize::from(self.width)
    }

    /// The same panel viewed with width and height swapped
    ///
    /// Used for the logical coordinate space of software-rotated
    /// orientations; not re-validated against the panel limits.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Display rotation relative to native orientation
///
/// Fixed at construction time. 0 and 180 degrees share the panel's native
/// buffer layout (180 is realized purely by hardware mirror flags); 90 and
/// 270 degrees swap the logical width/height and require a software
/// transpose before every transfer, which makes refresh roughly a third
/// slower. Switching between the two families at runtime is unsupported
/// because it would change the buffer dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Parse a rotation from a degree count
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidRotation` for anything other than
    /// 0, 90, 180 or 270.
    pub fn from_degrees(degrees: u16) -> Result<Self, BuilderError> {
        match degrees {
            0 => Ok(Self::Rotate0),
            90 => Ok(Self::Rotate90),
            180 => Ok(Self::Rotate180),
            270 => Ok(Self::Rotate270),
            _ => Err(BuilderError::InvalidRotation { degrees }),
        }
    }

    /// Whether this orientation needs the software transpose step
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    /// Initial flip state for this orientation
    ///
    /// 180 and 270 are the flipped members of their respective families.
    pub fn base_flip(self) -> bool {
        matches!(self, Self::Rotate180 | Self::Rotate270)
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the controller
/// session. Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Physical display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Whether the panel runs from an external Vcc supply
    ///
    /// Selects the pre-charge period and disables the internal charge pump
    /// during initialization.
    pub external_vcc: bool,
    /// Delay in milliseconds after switching the panel on
    ///
    /// Some panels need a settling time before they accept RAM writes.
    pub power_on_delay_ms: u32,
    /// Initial contrast level
    pub contrast: u8,
}

impl Config {
    /// Get the logical (post-rotation) dimensions
    ///
    /// Drawing operations address this coordinate space; for 90/270 degree
    /// rotations it is the physical panel with width and height swapped.
    pub fn logical_dimensions(&self) -> Dimensions {
        if self.rotation.is_transposed() {
            self.dimensions.transposed()
        } else {
            self.dimensions
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use sh1106::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Physical display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// External Vcc supply
    external_vcc: bool,
    /// Delay after power-on in milliseconds
    power_on_delay_ms: u32,
    /// Initial contrast level
    contrast: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            external_vcc: false,
            power_on_delay_ms: 0,
            // Controller reset default
            contrast: 0x80,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set whether the panel runs from an external Vcc supply
    pub fn external_vcc(mut self, external_vcc: bool) -> Self {
        self.external_vcc = external_vcc;
        self
    }

    /// Set the delay applied after switching the panel on
    pub fn power_on_delay_ms(mut self, delay_ms: u32) -> Self {
        self.power_on_delay_ms = delay_ms;
        self
    }

    /// Set the initial contrast level
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            external_vcc: self.external_vcc,
            power_on_delay_ms: self.power_on_delay_ms,
            contrast: self.contrast,
        })
    }
}
