//! JSON dump of descriptor tables.

use symbridge_shared::{BridgeError, BridgeResult};

use crate::descriptor::BindingDescriptor;

/// Pretty-printed descriptor table, one object per binding.
pub fn descriptor_table_json(table: &[BindingDescriptor]) -> BridgeResult<String> {
    serde_json::to_string_pretty(table)
        .map_err(|e| BridgeError::Descriptor(format!("failed to serialize descriptor table: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{IntWidth, Receiver, ValueKind};

    const TABLE: &[BindingDescriptor] = &[BindingDescriptor {
        symbol: "Demo_add",
        receiver: Receiver::Free,
        params: &[ValueKind::Integer(IntWidth::U32), ValueKind::Integer(IntWidth::U32)],
        returns: ValueKind::Integer(IntWidth::U32),
    }];

    #[test]
    fn test_pretty_dump() {
        let text = descriptor_table_json(TABLE).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["symbol"], "Demo_add");
        assert_eq!(parsed[0]["params"][1], "u32");
        assert_eq!(parsed[0]["receiver"], "function");
        assert_eq!(parsed[0]["returns"], "u32");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(descriptor_table_json(&[]).unwrap(), "[]");
    }
}
