use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One field of a camera-settings payload as it appears on the wire.
///
/// The grabber API distinguishes a key that is missing from the JSON object
/// (leave the camera's current value untouched) from a key that is an
/// explicit `null` (clear the value back to the service default). Collapsing
/// both into a single `Option` would lose that distinction, so the three
/// states are kept separate here.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<T> {
    /// Key absent from the wire object.
    Unset,
    /// Key present with an explicit JSON `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Default for FieldValue<T> {
    fn default() -> Self {
        FieldValue::Unset
    }
}

impl<T> FieldValue<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Unset)
    }

    /// `Some` becomes a value, `None` an explicit null. Used when a record
    /// with plain optional fields is flattened back onto the wire.
    pub fn from_option(opt: Option<T>) -> Self {
        match opt {
            Some(v) => FieldValue::Value(v),
            None => FieldValue::Null,
        }
    }

    /// Collapses to a plain `Option`, dropping the null/unset distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            FieldValue::Value(v) => Some(v),
            FieldValue::Null | FieldValue::Unset => None,
        }
    }
}

// A missing key never reaches Deserialize; `#[serde(default)]` on the field
// produces `Unset`. Anything that does reach us is either `null` or a value.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldValue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => FieldValue::Value(v),
            None => FieldValue::Null,
        })
    }
}

impl<T: Serialize> Serialize for FieldValue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Value(v) => v.serialize(serializer),
            FieldValue::Null | FieldValue::Unset => serializer.serialize_none(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for FieldValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unset => write!(f, "(unset)"),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Value(v) => write!(f, "{}", v),
        }
    }
}

/// One discovered GigE camera. `ip_address` is the natural key the rest of
/// the API uses to address it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub ip_address: String,
    pub serial_number: String,
    pub model_name: String,
}

/// Acquisition parameters for one camera, as exchanged with the
/// `/camera-settings/{ip}` resource. Every field is independently optional;
/// unset fields are omitted entirely when the record is serialized, so a
/// partial update only touches the keys it names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraSettings {
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub width: FieldValue<u32>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub height: FieldValue<u32>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub offset_x: FieldValue<u32>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub offset_y: FieldValue<u32>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub pixel_format: FieldValue<String>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub fps: FieldValue<f64>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub exposure: FieldValue<f64>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub exposure_mode: FieldValue<String>,
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub gain: FieldValue<f64>,
    /// GigE Vision stream-channel packet delay.
    #[serde(default, skip_serializing_if = "FieldValue::is_unset")]
    pub gev_scpd: FieldValue<String>,
}

/// The default configuration template, normalized for in-memory use. `None`
/// means "not configured", never zero.
///
/// The `/default_camera_settings` resource reports `exposure_mode` and
/// `gev_scpd` as numbers, while `/camera-settings/{ip}` uses strings for the
/// same parameters. The mismatch is upstream; this client mirrors each
/// resource as observed instead of guessing which side is right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefaultCameraConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub offset_x: Option<u32>,
    pub offset_y: Option<u32>,
    pub pixel_format: Option<String>,
    pub fps: Option<f64>,
    pub exposure: Option<f64>,
    pub exposure_mode: Option<f64>,
    pub gain: Option<f64>,
    pub gev_scpd: Option<f64>,
}

/// Wire shape of the default-config resource. On writes every key is
/// emitted, with `null` standing for "unset", so the service can apply the
/// whole template at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultCameraConfigWire {
    #[serde(default)]
    pub width: FieldValue<u32>,
    #[serde(default)]
    pub height: FieldValue<u32>,
    #[serde(default)]
    pub offset_x: FieldValue<u32>,
    #[serde(default)]
    pub offset_y: FieldValue<u32>,
    #[serde(default)]
    pub pixel_format: FieldValue<String>,
    #[serde(default)]
    pub fps: FieldValue<f64>,
    #[serde(default)]
    pub exposure: FieldValue<f64>,
    #[serde(default)]
    pub exposure_mode: FieldValue<f64>,
    #[serde(default)]
    pub gain: FieldValue<f64>,
    #[serde(default)]
    pub gev_scpd: FieldValue<f64>,
}

/// Read-path normalization: wire values survive, explicit nulls and missing
/// keys both land on `None`.
pub fn fill_defaults(wire: DefaultCameraConfigWire) -> DefaultCameraConfig {
    DefaultCameraConfig {
        width: wire.width.into_option(),
        height: wire.height.into_option(),
        offset_x: wire.offset_x.into_option(),
        offset_y: wire.offset_y.into_option(),
        pixel_format: wire.pixel_format.into_option(),
        fps: wire.fps.into_option(),
        exposure: wire.exposure.into_option(),
        exposure_mode: wire.exposure_mode.into_option(),
        gain: wire.gain.into_option(),
        gev_scpd: wire.gev_scpd.into_option(),
    }
}

/// Write-path normalization: `None` becomes an explicit `null`, never an
/// omitted key, so the service sees the full template on every save.
pub fn flatten_for_wire(config: &DefaultCameraConfig) -> DefaultCameraConfigWire {
    DefaultCameraConfigWire {
        width: FieldValue::from_option(config.width),
        height: FieldValue::from_option(config.height),
        offset_x: FieldValue::from_option(config.offset_x),
        offset_y: FieldValue::from_option(config.offset_y),
        pixel_format: FieldValue::from_option(config.pixel_format.clone()),
        fps: FieldValue::from_option(config.fps),
        exposure: FieldValue::from_option(config.exposure),
        exposure_mode: FieldValue::from_option(config.exposure_mode),
        gain: FieldValue::from_option(config.gain),
        gev_scpd: FieldValue::from_option(config.gev_scpd),
    }
}
