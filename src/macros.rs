// Copyright 2025 Cowboy AI, LLC.

//! The [`key_union!`](crate::key_union) macro: a keyed record and its derived
//! single-key union, defined in one pass

/// Defines a keyed record and derives its single-key union.
///
/// One invocation produces both the record struct (every key present, all
/// fields sharing one value type) and the union enum (exactly one variant
/// per key, carrying that value type). Because both come from the same key
/// list, the variant set can never drift from the field set.
///
/// The union serializes as a single-entry map, and its `Deserialize` impl
/// is the conformance verdict for candidate documents: a map populating
/// exactly one known key with a value of the uniform type is accepted;
/// empty maps, multi-key maps, unknown keys, and wrong value types are
/// rejected with diagnostics naming the expected keys. Both types also get
/// `JsonSchema` impls; the union renders as a `oneOf` of single-key
/// objects.
///
/// The value type must implement `Clone`, [`UniformValue`](crate::UniformValue),
/// the serde traits, and `JsonSchema`. The invoking crate must depend on
/// `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use key_union::key_union;
///
/// key_union! {
///     /// Count of each fruit on hand.
///     pub struct FruitCounts: u64 {
///         apple,
///         pear,
///         banana,
///     }
///     /// Exactly one fruit count at a time.
///     pub enum SingleFruitCount;
/// }
///
/// let counts = FruitCounts { apple: 1, pear: 4, banana: 26 };
/// assert_eq!(counts.split().len(), 3);
///
/// let single = SingleFruitCount::Apple(3);
/// assert_eq!(serde_json::to_string(&single).unwrap(), r#"{"apple":3}"#);
/// ```
#[macro_export]
macro_rules! key_union {
    (
        $(#[$record_meta:meta])*
        $record_vis:vis struct $record:ident : $value:ty {
            $( $(#[$key_meta:meta])* $key:ident ),+ $(,)?
        }
        $(#[$union_meta:meta])*
        $union_vis:vis enum $union:ident;
    ) => {
        $crate::__private::paste! {
            $(#[$record_meta])*
            #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            $record_vis struct $record {
                $(
                    $(#[$key_meta])*
                    #[doc = concat!("Value held by the `", stringify!($key), "` key.")]
                    pub $key: $value,
                )+
            }

            impl $record {
                /// Keys of the record, in declaration order.
                pub const KEYS: &'static [&'static str] = &[$(stringify!($key)),+];

                /// The record's shape as a source mapping.
                pub fn shape() -> $crate::SourceShape {
                    $crate::__private::source_shape(
                        <$value as $crate::UniformValue>::VALUE_TYPE,
                        Self::KEYS,
                    )
                }

                /// Decomposes the record into one single-key value per field.
                pub fn split(&self) -> ::std::vec::Vec<$union> {
                    ::std::vec![
                        $( $union::[<$key:camel>](self.$key.clone()) ),+
                    ]
                }
            }

            $(#[$union_meta])*
            #[derive(Debug, Clone, PartialEq)]
            $union_vis enum $union {
                $(
                    #[doc = concat!("The `", stringify!($key), "` key alone.")]
                    [<$key:camel>]($value),
                )+
            }

            impl $union {
                /// Keys admitted by the union, one per variant.
                pub const KEYS: &'static [&'static str] = &[$(stringify!($key)),+];

                /// The union's shape, derived from the record's source mapping.
                pub fn shape() -> $crate::UnionShape {
                    $record::shape().derive_union()
                }

                /// The single key this value populates.
                pub fn key(&self) -> &'static str {
                    match self {
                        $( Self::[<$key:camel>](_) => stringify!($key), )+
                    }
                }

                /// The value behind the populated key.
                pub fn value(&self) -> &$value {
                    match self {
                        $( Self::[<$key:camel>](value) => value, )+
                    }
                }

                /// Consumes the union value, returning the carried value.
                pub fn into_value(self) -> $value {
                    match self {
                        $( Self::[<$key:camel>](value) => value, )+
                    }
                }
            }

            impl $crate::__private::serde::Serialize for $union {
                fn serialize<S>(
                    &self,
                    serializer: S,
                ) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::Serializer,
                {
                    use $crate::__private::serde::ser::SerializeMap;

                    let mut map = serializer.serialize_map(::core::option::Option::Some(1))?;
                    match self {
                        $(
                            Self::[<$key:camel>](value) => {
                                map.serialize_entry(stringify!($key), value)?;
                            }
                        )+
                    }
                    map.end()
                }
            }

            impl<'de> $crate::__private::serde::Deserialize<'de> for $union {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: $crate::__private::serde::Deserializer<'de>,
                {
                    struct KeyVisitor;

                    impl<'de> $crate::__private::serde::de::Visitor<'de> for KeyVisitor {
                        type Value = $union;

                        fn expecting(
                            &self,
                            formatter: &mut ::core::fmt::Formatter<'_>,
                        ) -> ::core::fmt::Result {
                            ::core::write!(
                                formatter,
                                "a map populating exactly one of the keys {:?}",
                                $union::KEYS
                            )
                        }

                        fn visit_map<A>(
                            self,
                            mut map: A,
                        ) -> ::core::result::Result<Self::Value, A::Error>
                        where
                            A: $crate::__private::serde::de::MapAccess<'de>,
                        {
                            use $crate::__private::serde::de::Error;

                            let key = match map.next_key::<::std::string::String>()? {
                                ::core::option::Option::Some(key) => key,
                                ::core::option::Option::None => {
                                    return ::core::result::Result::Err(
                                        A::Error::invalid_length(0, &self),
                                    );
                                }
                            };
                            let value = match key.as_str() {
                                $(
                                    stringify!($key) => {
                                        $union::[<$key:camel>](map.next_value()?)
                                    }
                                )+
                                other => {
                                    return ::core::result::Result::Err(
                                        A::Error::unknown_field(other, $union::KEYS),
                                    );
                                }
                            };
                            if let ::core::option::Option::Some(extra) =
                                map.next_key::<::std::string::String>()?
                            {
                                return ::core::result::Result::Err(A::Error::custom(
                                    ::std::format!(
                                        "unexpected second key `{}`: {} holds exactly one key",
                                        extra,
                                        stringify!($union),
                                    ),
                                ));
                            }
                            ::core::result::Result::Ok(value)
                        }
                    }

                    deserializer.deserialize_map(KeyVisitor)
                }
            }

            impl $crate::__private::schemars::JsonSchema for $record {
                fn schema_name() -> ::std::string::String {
                    ::std::string::String::from(stringify!($record))
                }

                fn json_schema(
                    gen: &mut $crate::__private::schemars::gen::SchemaGenerator,
                ) -> $crate::__private::schemars::schema::Schema {
                    let value_schema = gen.subschema_for::<$value>();
                    $crate::schema::record_of_keys(
                        stringify!($record),
                        Self::KEYS,
                        value_schema,
                    )
                }
            }

            impl $crate::__private::schemars::JsonSchema for $union {
                fn schema_name() -> ::std::string::String {
                    ::std::string::String::from(stringify!($union))
                }

                fn json_schema(
                    gen: &mut $crate::__private::schemars::gen::SchemaGenerator,
                ) -> $crate::__private::schemars::schema::Schema {
                    let value_schema = gen.subschema_for::<$value>();
                    $crate::schema::union_of_keys(
                        stringify!($union),
                        Self::KEYS,
                        value_schema,
                    )
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::ValueType;

    crate::key_union! {
        /// Feature switches, all boolean.
        struct Switches: bool {
            dark_mode,
            beta_banner,
        }
        /// One switch at a time.
        enum SingleSwitch;
    }

    crate::key_union! {
        /// Label per slot.
        struct SlotLabels: String {
            front,
            back,
        }
        /// One labeled slot.
        enum SingleSlotLabel;
    }

    #[test]
    fn test_keys_follow_declaration_order() {
        assert_eq!(Switches::KEYS, &["dark_mode", "beta_banner"]);
        assert_eq!(SingleSwitch::KEYS, Switches::KEYS);
    }

    #[test]
    fn test_variant_key_and_value() {
        let switch = SingleSwitch::DarkMode(true);
        assert_eq!(switch.key(), "dark_mode");
        assert_eq!(switch.value(), &true);
    }

    #[test]
    fn test_into_value_moves_non_copy_values() {
        let label = SingleSlotLabel::Front("box A".to_string());
        assert_eq!(label.into_value(), "box A");
    }

    #[test]
    fn test_split_covers_every_key() {
        let switches = Switches {
            dark_mode: true,
            beta_banner: false,
        };

        let parts = switches.split();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], SingleSwitch::DarkMode(true));
        assert_eq!(parts[1], SingleSwitch::BetaBanner(false));
    }

    #[test]
    fn test_shape_reflects_value_type() {
        assert_eq!(Switches::shape().value_type(), ValueType::Boolean);
        assert_eq!(SlotLabels::shape().value_type(), ValueType::Text);
        assert_eq!(SingleSwitch::shape(), Switches::shape().derive_union());
    }

    #[test]
    fn test_round_trip_through_json() {
        let label = SingleSlotLabel::Back("box B".to_string());
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"back":"box B"}"#);

        let parsed: SingleSlotLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, label);
    }

    #[test]
    fn test_rejects_wrong_value_type() {
        assert!(serde_json::from_str::<SingleSwitch>(r#"{"dark_mode":"yes"}"#).is_err());
    }
}
