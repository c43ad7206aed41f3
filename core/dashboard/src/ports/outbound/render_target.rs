//! 描画先 Outbound ポート
//!
//! DOM を直接触らず「領域の中身を置き換える」「グループ内で 1 つだけ active にする」
//! 能力だけを公開する。Dashboard コントローラはこの trait 経由でのみ描画する。

/// 中身を置き換えられる領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// 表示領域全体（読み込み失敗時のエラー表示に使う）
    Content,
    AgentGrid,
    /// 詳細パネル全体（表示・スクロールの対象）
    DetailPanel,
    DetailTitle,
    DetailContent,
    ProjectList,
    LogsContent,
    BuiltAt,
}

/// 同時に 1 要素だけ active になるグループ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// サイドバーのナビゲーションリンク（キーは Section::key）
    NavLinks,
    /// セクション本体（キーは Section::key）
    Sections,
    /// 詳細パネルのタブボタン（キーは DetailTab::key）
    DetailTabs,
}

/// 描画先
pub trait RenderTarget {
    /// 領域の中身を HTML 断片で置き換える
    fn replace_html(&mut self, region: Region, html: &str);

    /// 領域の中身をテキストで置き換える（エスケープは実装側の責任）
    fn set_text(&mut self, region: Region, text: &str);

    /// グループ内で `key` の要素だけを active にし、他は外す
    fn set_active(&mut self, group: Group, key: &str);

    /// 領域を表示状態にする（詳細パネル）
    fn reveal(&mut self, region: Region);

    /// 領域が見えるようスクロールする
    fn scroll_into_view(&mut self, region: Region);
}

/// ページ全体を 1 つの文書として書き出せる描画先
///
/// 実装は adapter::HtmlPage（HTML 文書）。usecase は新しいページを Default で作る。
pub trait PageTarget: RenderTarget + Default {
    fn to_document(&self) -> String;
}
