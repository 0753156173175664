//! Ontology type to category tag classification

use std::collections::BTreeSet;

/// Type name (namespace stripped) to the category tags it stands for.
///
/// Plugin classes from the LV2 core vocabulary and the MOD extensions share
/// local names, so both namespaces feed the same table.
const CATEGORY_MAP: &[(&str, &[&str])] = &[
    ("MIDIPlugin", &["MIDI"]),
    ("DistortionPlugin", &["Distortion"]),
    ("WaveshaperPlugin", &["Distortion", "Waveshaper"]),
    ("DynamicsPlugin", &["Dynamics"]),
    ("SimulatorPlugin", &["Simulator"]),
    ("AmplifierPlugin", &["Dynamics", "Amplifier"]),
    ("CompressorPlugin", &["Dynamics", "Compressor"]),
    ("ControlVoltagePlugin", &["ControlVoltage"]),
    ("ExpanderPlugin", &["Dynamics", "Expander"]),
    ("GatePlugin", &["Dynamics", "Gate"]),
    ("LimiterPlugin", &["Dynamics", "Limiter"]),
    ("FilterPlugin", &["Filter"]),
    ("AllpassPlugin", &["Filter", "Allpass"]),
    ("BandpassPlugin", &["Filter", "Bandpass"]),
    ("CombPlugin", &["Filter", "Comb"]),
    ("EQPlugin", &["Filter", "Equaliser"]),
    ("MultiEQPlugin", &["Filter", "Equaliser", "Multiband"]),
    ("ParaEQPlugin", &["Filter", "Equaliser", "Parametric"]),
    ("HighpassPlugin", &["Filter", "Highpass"]),
    ("LowpassPlugin", &["Filter", "Lowpass"]),
    ("GeneratorPlugin", &["Generator"]),
    ("ConstantPlugin", &["Generator", "Constant"]),
    ("InstrumentPlugin", &["Generator", "Instrument"]),
    ("OscillatorPlugin", &["Generator", "Oscillator"]),
    ("ModulatorPlugin", &["Modulator"]),
    ("ChorusPlugin", &["Modulator", "Chorus"]),
    ("FlangerPlugin", &["Modulator", "Flanger"]),
    ("PhaserPlugin", &["Modulator", "Phaser"]),
    ("ReverbPlugin", &["Reverb"]),
    ("SpatialPlugin", &["Spatial"]),
    ("SpectralPlugin", &["Spectral"]),
    ("PitchPlugin", &["Pitch Shifter", "Spectral"]),
    ("DelayPlugin", &["Delay"]),
    ("UtilityPlugin", &["Utility"]),
    ("AnalyserPlugin", &["Utility", "Analyser"]),
    ("ConverterPlugin", &["Utility", "Converter"]),
    ("FunctionPlugin", &["Utility", "Function"]),
    ("MixerPlugin", &["Utility", "Mixer"]),
];

/// Static lookup from plugin class names to category tags.
///
/// # Example
///
/// ```
/// use patchbot_meta::CategoryClassifier;
///
/// let tags = CategoryClassifier::classify(["ParaEQPlugin", "Plugin"]);
/// let tags: Vec<_> = tags.into_iter().collect();
/// assert_eq!(tags, ["Equaliser", "Filter", "Parametric"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    /// Tags for one type name, if the type is known.
    pub fn tags_for(type_name: &str) -> Option<&'static [&'static str]> {
        CATEGORY_MAP
            .iter()
            .find(|(name, _)| *name == type_name)
            .map(|(_, tags)| *tags)
    }

    /// Union of the tags of every known type. Unknown types contribute
    /// nothing, so the result may be empty.
    pub fn classify<'a>(types: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        types
            .into_iter()
            .filter_map(Self::tags_for)
            .flatten()
            .map(|tag| tag.to_string())
            .collect()
    }

    /// Every type name the table knows.
    pub fn type_names() -> impl Iterator<Item = &'static str> {
        CATEGORY_MAP.iter().map(|(name, _)| *name)
    }

    /// Every distinct tag the table can produce.
    pub fn all_tags() -> BTreeSet<&'static str> {
        CATEGORY_MAP
            .iter()
            .flat_map(|(_, tags)| tags.iter().copied())
            .collect()
    }
}
