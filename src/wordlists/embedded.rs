//! Embedded answer list
//!
//! A curated pool of common five-letter answer words compiled into the
//! binary, so the game runs with no files or network. A custom list can be
//! supplied at the CLI instead.

/// Built-in answer words
pub const ANSWERS: &[&str] = &[
    "abide", "alloy", "amber", "angle", "apple", "arson", "askew", "audio", "awake", "badge",
    "basil", "beach", "began", "birch", "blaze", "blend", "bluff", "board", "brave", "bread",
    "brisk", "broom", "cabin", "candy", "cargo", "chair", "charm", "chess", "chill", "churn",
    "cider", "clasp", "climb", "cloud", "coast", "crane", "crisp", "crumb", "curve", "daily",
    "dance", "depth", "dodge", "dough", "dream", "drift", "eagle", "earth", "elbow", "ember",
    "erase", "fable", "feast", "fence", "fever", "field", "flame", "fleet", "flour", "forge",
    "frost", "gauge", "geese", "glide", "gloom", "grain", "grasp", "grove", "habit", "haste",
    "heart", "hedge", "hoist", "honey", "house", "imply", "inlet", "irate", "ivory", "jelly",
    "joint", "knead", "lapse", "latch", "lemon", "lodge", "loyal", "lunar", "maple", "march",
    "mirth", "mossy", "mount", "night", "noble", "ocean", "olive", "orbit", "otter", "patch",
    "pearl", "pivot", "plank", "plume", "prism", "quail", "quilt", "radio", "raise", "ranch",
    "reign", "ridge", "river", "roast", "robin", "salve", "scarf", "shade", "shelf", "shore",
    "slate", "sleet", "smoke", "snare", "spice", "spine", "sprig", "stare", "steam", "steel",
    "stone", "storm", "swirl", "thyme", "tidal", "torch", "trace", "trunk", "tulip", "vapor",
    "vivid", "wager", "whale", "wheat", "woven", "yearn",
];

/// Number of words in ANSWERS
pub const ANSWERS_COUNT: usize = 146;
