/// 沒有任何參數時查詢的經節
pub const DEFAULT_REFERENCE: &str = "John 3:16";

/// 命令列呼叫方式。參數內容本身不會被解析。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// 沒有參數：查詢預設經節並輸出
    DefaultLookup,
    /// 有任何參數：不做任何事
    Ignored(Vec<String>),
}

impl Invocation {
    /// `args` 不含程式名稱
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.is_empty() {
            Invocation::DefaultLookup
        } else {
            Invocation::Ignored(args)
        }
    }

    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn reference(&self) -> Option<&'static str> {
        match self {
            Invocation::DefaultLookup => Some(DEFAULT_REFERENCE),
            Invocation::Ignored(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_default_lookup() {
        let invocation = Invocation::from_args(Vec::new());
        assert_eq!(invocation, Invocation::DefaultLookup);
        assert_eq!(invocation.reference(), Some("John 3:16"));
    }

    #[test]
    fn test_any_args_are_ignored() {
        let invocation = Invocation::from_args(vec!["--help".to_string()]);
        assert_eq!(invocation, Invocation::Ignored(vec!["--help".to_string()]));
        assert_eq!(invocation.reference(), None);

        let invocation = Invocation::from_args(vec!["Rom.".to_string(), "8:2".to_string()]);
        assert!(invocation.reference().is_none());
    }
}
