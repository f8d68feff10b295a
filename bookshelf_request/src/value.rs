use std::fmt::{self, Display, Formatter, Write};

use itertools::Itertools;

/// SQL argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer value.
    Integer(i64),
    /// String value.
    String(String),
    /// Repeated value, bound as an array.
    Repeated(Vec<Value>),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => value.fmt(f),
            Self::String(value) => {
                f.write_char('"')?;
                value.fmt(f)?;
                f.write_char('"')
            }
            Self::Repeated(values) => write!(f, "[{}]", values.iter().join(", ")),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Repeated(values)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Repeated(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "postgres")]
const _: () = {
    use bytes::BytesMut;
    use postgres_types::{IsNull, ToSql, Type, to_sql_checked};

    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
        where
            Self: Sized,
        {
            match self {
                Self::Integer(value) => value.to_sql(ty, out),
                Self::String(value) => value.to_sql(ty, out),
                Self::Repeated(values) => values.to_sql(ty, out),
            }
        }

        fn accepts(ty: &Type) -> bool {
            matches!(
                ty,
                &Type::INT8
                    | &Type::VARCHAR
                    | &Type::TEXT
                    | &Type::INT8_ARRAY
                    | &Type::VARCHAR_ARRAY
                    | &Type::TEXT_ARRAY
            )
        }

        to_sql_checked!();
    }

    impl<'a> FromIterator<&'a Value> for Vec<&'a (dyn ToSql + Sync)> {
        fn from_iter<T: IntoIterator<Item = &'a Value>>(iter: T) -> Self {
            let mut elements: Vec<&(dyn ToSql + Sync)> = Vec::new();
            for e in iter {
                elements.push(e);
            }
            elements
        }
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::String("foo".into()).to_string(), "\"foo\"");
        assert_eq!(
            Value::Repeated(vec![Value::Integer(1), 2.into(), 3.into()]).to_string(),
            "[1, 2, 3]"
        );
    }

    #[test]
    fn collect_repeated() {
        let value: Value = [1i64, 2, 3].into_iter().collect();
        assert_eq!(value, Value::Repeated(vec![1.into(), 2.into(), 3.into()]));
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn accepts_bound_types() {
        use postgres_types::{ToSql, Type};

        assert!(<Value as ToSql>::accepts(&Type::INT8));
        assert!(<Value as ToSql>::accepts(&Type::TEXT));
        assert!(<Value as ToSql>::accepts(&Type::INT8_ARRAY));
        assert!(!<Value as ToSql>::accepts(&Type::BOOL));
    }
}
