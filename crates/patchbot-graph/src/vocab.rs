//! Predicates and classes used by LV2 plugin descriptions.

pub mod rdf {
    use crate::Term;

    pub static TYPE: Term = Term::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

pub mod rdfs {
    use crate::Term;

    pub static COMMENT: Term = Term::from_static("http://www.w3.org/2000/01/rdf-schema#comment");
    pub static SEE_ALSO: Term = Term::from_static("http://www.w3.org/2000/01/rdf-schema#seeAlso");
}

pub mod lv2 {
    use crate::Term;

    pub const NS: &str = "http://lv2plug.in/ns/lv2core#";

    pub static PLUGIN: Term = Term::from_static("http://lv2plug.in/ns/lv2core#Plugin");
    pub static MINOR_VERSION: Term = Term::from_static("http://lv2plug.in/ns/lv2core#minorVersion");
    pub static MICRO_VERSION: Term = Term::from_static("http://lv2plug.in/ns/lv2core#microVersion");
}

pub mod doap {
    use crate::Term;

    pub static NAME: Term = Term::from_static("http://usefulinc.com/ns/doap#name");
    pub static LABEL: Term = Term::from_static("http://usefulinc.com/ns/doap#label");
    pub static LICENSE: Term = Term::from_static("http://usefulinc.com/ns/doap#license");
    pub static DEVELOPER: Term = Term::from_static("http://usefulinc.com/ns/doap#developer");
    pub static MAINTAINER: Term = Term::from_static("http://usefulinc.com/ns/doap#maintainer");
}

pub mod foaf {
    use crate::Term;

    pub static NAME: Term = Term::from_static("http://xmlns.com/foaf/0.1/name");
}

/// MOD Devices plugin extensions
pub mod moddevices {
    use crate::Term;

    pub const NS: &str = "http://moddevices.com/ns/mod#";

    pub static BRAND: Term = Term::from_static("http://moddevices.com/ns/mod#brand");
}

/// MOD Devices GUI description
pub mod modgui {
    use crate::Term;

    pub static GUI: Term = Term::from_static("http://moddevices.com/ns/modgui#gui");
    pub static SCREENSHOT: Term = Term::from_static("http://moddevices.com/ns/modgui#screenshot");
    pub static BRAND: Term = Term::from_static("http://moddevices.com/ns/modgui#brand");
}
