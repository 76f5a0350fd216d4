use std::fmt;

/// A code address.
///
/// While building, an address is a label handle from
/// [`ProgramBuilder::make_address`](crate::ProgramBuilder::make_address).
/// Inside an assembled [`Program`](crate::Program) it is an instruction index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub(crate) u32);

impl Address {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// An integer counter register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntRegister(pub(crate) u16);

impl IntRegister {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for IntRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// A register holding an input position, or nothing.
///
/// Loops whose body can match empty mark where each pass started and stop
/// iterating once a pass consumes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PosRegister(pub(crate) u16);

impl PosRegister {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PosRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Handle into a program's constant string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringId(pub(crate) u32);

impl StringId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
