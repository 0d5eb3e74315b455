//! The canned passages shipped with the demo.

pub const BEE: &str = "According to all known laws of aviation, there is no way a bee \
should be able to fly. Its wings are too small to get its fat little body off the \
ground. The bee, of course, flies anyway because bees don't care what humans think \
is impossible. Yellow, black. Yellow, black. Yellow, black. Yellow, black.";

pub const DUNE: &str = "I must not fear. Fear is the mind-killer. Fear is the \
little-death that brings total obliteration. I will face my fear. I will permit it \
to pass over me and through me. And when it has gone past I will turn the inner eye \
to see its path. Where the fear has gone there will be nothing. Only I will remain.";

pub const RAPTURE: &str = "I am Andrew Ryan, and I\u{2019}m here to ask you a question. \
Is a man not entitled to the sweat of his brow? \u{2018}No!\u{2019} says the man in \
Washington, \u{2018}It belongs to the poor.\u{2019} \u{2018}No!\u{2019} says the man \
in the Vatican, \u{2018}It belongs to God.\u{2019} \u{2018}No!\u{2019} says the man \
in Moscow, \u{2018}It belongs to everyone.\u{2019} I rejected those answers; instead, \
I chose something different. I chose the impossible. I chose\u{2026} Rapture, a city \
where the artist would not fear the censor, where the scientist would not be bound \
by petty morality, Where the great would not be constrained by the small! And with \
the sweat of your brow, Rapture can become your city as well.";

pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "bee" => Some(BEE),
        "dune" => Some(DUNE),
        "rapture" => Some(RAPTURE),
        _ => None,
    }
}
