/// Fields of a device record, each bound to exactly one wire key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Name,
    Id,
    Type,
    IsCurrentDevice,
    PushCallback,
    PushPublicKey,
    PushAuthKey,
}

impl Field {
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "id",
            Field::Type => "type",
            Field::IsCurrentDevice => "isCurrentDevice",
            Field::PushCallback => "pushCallback",
            Field::PushPublicKey => "pushPublicKey",
            Field::PushAuthKey => "pushAuthKey",
        }
    }
}

/// Every key read by decode.
pub const DECODE_ORDER: [Field; 7] = [
    Field::Name,
    Field::Id,
    Field::Type,
    Field::IsCurrentDevice,
    Field::PushCallback,
    Field::PushPublicKey,
    Field::PushAuthKey,
];

/// Keys written by encode, in insertion order. `isCurrentDevice` is read-only on the wire.
pub const ENCODE_ORDER: [Field; 6] = [
    Field::Name,
    Field::Id,
    Field::Type,
    Field::PushCallback,
    Field::PushPublicKey,
    Field::PushAuthKey,
];
