pub struct ElementGuide {
    pub key: &'static str,
    pub hint: &'static str,
}

pub struct ReflectionHints {
    pub subject: &'static str,
    pub meaning: &'static str,
    pub interaction: &'static str,
    pub style: &'static str,
    pub medium: &'static str,
}

/// Per-domain wording consumed by the generic pipeline. Portrait and
/// sculpture share every mechanism; only this descriptor differs.
pub struct Vocabulary {
    pub name: &'static str,
    pub default_form: &'static str,
    pub elements_system: &'static str,
    pub elements_lead: &'static str,
    pub elements_charge: &'static str,
    pub element_guides: &'static [ElementGuide],
    pub reflection_system: &'static str,
    pub reflection_charge: &'static str,
    pub reflection_hints: ReflectionHints,
    pub finalize_system: &'static str,
    pub finalize_charge: &'static str,
}

pub static PORTRAIT: Vocabulary = Vocabulary {
    name: "portrait",
    default_form: "portrait",
    elements_system: "You are an art historian who reads artworks through Michael Baxandall's \
notion of the period eye, interpreting works of art in words. Your task is to take a given \
portrait concept and its settings and produce a structured description that fully interprets \
the portrait.",
    elements_lead: "The concept and basic settings of the portrait are as follows:",
    elements_charge: "Based on the concept and settings above, produce a structured description \
of the portrait covering:",
    element_guides: &[
        ElementGuide {
            key: "subject",
            hint: "how the concept is embodied as the portrait of a person",
        },
        ElementGuide {
            key: "meaning",
            hint: "the cultural and social significance the work is meant to convey",
        },
        ElementGuide {
            key: "interaction",
            hint: "who the portrait is delivered to, and which of their expectations, needs \
and challenges it answers",
        },
        ElementGuide {
            key: "style",
            hint: "the formal character of the work, reducible to a movement or an artist's \
manner, such as classicism or the Dada manner of Marcel Duchamp",
        },
        ElementGuide {
            key: "medium",
            hint: "the physical materials and craft involved in realising the work, such as \
photography, oil painting, illustration, works on paper or 3D",
        },
    ],
    reflection_system: "You are a master art historian who reads artworks through Michael \
Baxandall's notion of the period eye. Your task is to analyse the given portrait concept and \
its description, reflect on how well the description serves the concept, and keep or update \
each part so the portrait gains expressive and artistic force.",
    reflection_charge: "Review the description and make sure every entry heightens the \
expressive and artistic force of the concept. Answer with the updated description in this \
format:",
    reflection_hints: ReflectionHints {
        subject: "the key features of the sitter, such as posture, expression, gaze and dress",
        meaning: "the deeper significance the portrait symbolises, whether cultural, social \
or personal",
        interaction: "the intended audience of the work, and how it answers their needs",
        style: "artistic style and technique, including composition, colour and the handling \
of light",
        medium: "the materials of the work, such as canvas, pigments, lens and state of \
preservation",
    },
    finalize_system: "You are an artist practised in visual creation with Stable Diffusion. \
Your task is to distill the given description into Stable Diffusion prompts that yield an \
expressive, artistically convincing portrait.",
    finalize_charge: "Distill the following description into terse prompts that follow \
Stable Diffusion syntax.",
};

pub static SCULPTURE: Vocabulary = Vocabulary {
    name: "sculpture",
    default_form: "sculpture",
    elements_system: "You are an art historian who reads artworks through Michael Baxandall's \
notion of the period eye, with a particular feel for sculpture. Your task is to take a given \
creative concept and its settings and produce a structured description that fully interprets \
the sculpture.",
    elements_lead: "The concept and settings of the sculpture are as follows:",
    elements_charge: "Based on the concept and settings above, produce a structured description \
of the sculpture covering:",
    element_guides: &[
        ElementGuide {
            key: "subject",
            hint: "how the concept is embodied as a sculpture, foregrounding the principal \
object",
        },
        ElementGuide {
            key: "meaning",
            hint: "the cultural and social significance the work is meant to convey",
        },
        ElementGuide {
            key: "interaction",
            hint: "who the likely buyers of the work are, and which of their expectations, \
needs and challenges it answers",
        },
        ElementGuide {
            key: "style",
            hint: "the formal character of the work, reducible to a movement or a sculptor's \
manner, such as the ancient Greek manner or that of Myron",
        },
        ElementGuide {
            key: "medium",
            hint: "the physical materials involved, such as stone, metal, ceramic, glass, \
concrete, polymer, ice, sand, water or air, and the craft applied, such as carving, \
modelling, casting, assembly, welding or relief",
        },
    ],
    reflection_system: "You are a master art historian who reads artworks through Michael \
Baxandall's notion of the period eye. Your task is to analyse the given creative concept and \
its description, reflect on how well the description serves the concept, and keep or update \
each part so the sculpture gains expressive and artistic force.",
    reflection_charge: "Review the description and make sure every entry heightens the \
expressive and artistic force of the concept. Answer with the updated description in this \
format:",
    reflection_hints: ReflectionHints {
        subject: "the key features of the work, such as principal subject, dimensions, \
proportion, posture and expression",
        meaning: "the deeper significance the sculpture symbolises, whether cultural, social \
or personal",
        interaction: "the potential buyers of the work, and how it answers their needs",
        style: "artistic style and technique, including the handling of form and surface",
        medium: "the materials of the work, such as principal material, supporting materials \
and fabrication",
    },
    finalize_system: "You are an artist practised in visual creation with Stable Diffusion, \
with a particular focus on sculptural work. Your task is to distill the given description \
into Stable Diffusion prompts that yield an expressive, artistically convincing sculpture.",
    finalize_charge: "Distill the following description into terse prompts that follow \
Stable Diffusion syntax.",
};
