use crate::constants::search_engine;

/// 支持的搜索引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    DuckDuckGo,
    Brave,
}

impl SearchEngine {
    /// 根据名称选择搜索引擎，无法识别时使用 Google
    pub fn from_name(name: &str) -> Self {
        match name {
            "duckduckgo" => SearchEngine::DuckDuckGo,
            "brave" => SearchEngine::Brave,
            _ => SearchEngine::Google,
        }
    }

    fn template(self) -> &'static str {
        match self {
            SearchEngine::Google => search_engine::GOOGLE,
            SearchEngine::DuckDuckGo => search_engine::DUCKDUCKGO,
            SearchEngine::Brave => search_engine::BRAVE,
        }
    }

    /// 生成搜索 URL（已带 https:// 前缀）；查询为空时返回空串
    pub fn search_url(self, query: &str) -> String {
        if query.is_empty() {
            return String::new();
        }
        format!("https://{}", self.template().replace("{}", query))
    }
}

/// 清理查询串：空格替换为 `+`，去掉双引号
pub fn clean_query(raw: &str) -> String {
    raw.replace(' ', "+").replace('"', "")
}
