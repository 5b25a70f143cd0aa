/// Declare a configuration section together with its defaults
///
/// Each field is written as `name: Type = default`. The macro expands to a
/// struct with public fields, a matching `Default` impl and serde support with
/// `#[serde(default)]`, so a TOML file only has to mention the fields it
/// changes.
///
/// ```ignore
/// config_struct! {
///     pub struct ServerConfig {
///         host: String = "0.0.0.0".to_string(),
///         port: u16 = 8001,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
