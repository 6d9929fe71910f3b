use std::fmt;

/// Position and size of one field inside a C record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

/// Layout of a `#[repr(C)]` record as compiled into this binary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecordLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (size {}, align {})", self.name, self.size, self.align)?;
        for field in &self.fields {
            write!(f, "\n  +{:<3} {} [{} bytes]", field.offset, field.name, field.size)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordLayout {
        RecordLayout {
            name: "Pair",
            size: 16,
            align: 8,
            fields: vec![
                FieldLayout { name: "a", offset: 0, size: 8 },
                FieldLayout { name: "b", offset: 8, size: 8 },
            ],
        }
    }

    #[test]
    fn display_lists_fields_in_order() {
        let text = sample().to_string();
        assert!(text.starts_with("Pair (size 16, align 8)"));
        let a = text.find(" a ").unwrap();
        let b = text.find(" b ").unwrap();
        assert!(a < b);
    }
}
