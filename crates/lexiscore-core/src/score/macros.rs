//! Declarative macros for reducing score type boilerplate.
//!
//! These macros generate the repetitive trait implementations that all
//! field-based score types share: lexicographic ordering, arithmetic ops,
//! and slash-separated text round-tripping. Every generated impl is generic
//! over the level representation `N: ScoreNumber`.

/// Generates `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Add`, `Sub`, and `Neg`
/// for a field-based score type.
///
/// Fields must be listed from most to least significant; the constructor
/// must accept them in that order.
///
/// # Usage
/// ```ignore
/// impl_score_ops!(HardSoftScore { hard, soft } => of);
/// ```
macro_rules! impl_score_ops {
    ($type:ident { $($field:ident),+ } => $ctor:ident) => {
        impl<N: $crate::score::ScoreNumber> PartialEq for $type<N> {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == std::cmp::Ordering::Equal
            }
        }

        impl<N: $crate::score::ScoreNumber> Eq for $type<N> {}

        impl<N: $crate::score::ScoreNumber> Ord for $type<N> {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                std::cmp::Ordering::Equal
                    $(.then_with(|| {
                        $crate::score::ScoreNumber::compare_level(&self.$field, &other.$field)
                    }))+
            }
        }

        impl<N: $crate::score::ScoreNumber> PartialOrd for $type<N> {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<N: $crate::score::ScoreNumber> std::ops::Add for $type<N> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $type::$ctor( $(self.$field + other.$field),+ )
            }
        }

        impl<N: $crate::score::ScoreNumber> std::ops::Sub for $type<N> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $type::$ctor( $(self.$field - other.$field),+ )
            }
        }

        impl<N: $crate::score::ScoreNumber> std::ops::Neg for $type<N> {
            type Output = Self;

            fn neg(self) -> Self {
                $type::$ctor( $(-self.$field),+ )
            }
        }
    };
}

/// Generates `Display` and `ParseableScore` for scores using the
/// `"Xsuffix/Ysuffix"` format.
///
/// Each field maps to a suffix label (e.g., `hard => "hard"`). Level values
/// are parsed with [`ScoreNumber::parse_level`](crate::score::ScoreNumber::parse_level),
/// so `Display` followed by `parse` is lossless for every representation.
///
/// # Usage
/// ```ignore
/// impl_score_text!(HardSoftScore { hard => "hard", soft => "soft" } => of);
/// impl_score_text!(SimpleScore { score => "" } => of);
/// ```
macro_rules! impl_score_text {
    ($type:ident { $($field:ident => $suffix:literal),+ } => $ctor:ident) => {
        impl<N: $crate::score::ScoreNumber> std::fmt::Display for $type<N> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts: &[String] = &[ $(format!("{}{}", self.$field, $suffix)),+ ];
                write!(f, "{}", parts.join("/"))
            }
        }

        impl<N: $crate::score::ScoreNumber> $crate::score::traits::ParseableScore for $type<N> {
            fn parse(s: &str) -> Result<Self, $crate::score::traits::ScoreParseError> {
                let s = s.trim();
                let parts: Vec<&str> = s.split('/').collect();
                let suffixes: &[&str] = &[ $($suffix),+ ];
                let count = suffixes.len();

                if parts.len() != count {
                    return Err($crate::score::traits::ScoreParseError {
                        message: format!(
                            "Invalid {} format '{}': expected {} parts separated by '/'",
                            stringify!($type), s, count
                        ),
                    });
                }

                let mut _idx = 0usize;
                $(
                    let $field = {
                        let part = parts[_idx].trim();
                        let num_str = part.strip_suffix($suffix).ok_or_else(|| {
                            $crate::score::traits::ScoreParseError {
                                message: format!(
                                    "{} part '{}' must end with '{}'",
                                    stringify!($field), part, $suffix
                                ),
                            }
                        })?;
                        let val = <N as $crate::score::ScoreNumber>::parse_level(num_str)
                            .map_err(|e| $crate::score::traits::ScoreParseError {
                                message: format!(
                                    "Invalid {} score '{}': {}",
                                    stringify!($field), num_str, e
                                ),
                            })?;
                        _idx += 1;
                        val
                    };
                )+

                Ok($type::$ctor( $($field),+ ))
            }

            fn to_string_repr(&self) -> String {
                self.to_string()
            }
        }
    };
}

// Macros are used via #[macro_use] on the module declaration.
