// templates/pages/listings.rs

use crate::domain::listing::{Listing, ListingCells, SearchStatus};
use crate::templates::components::status_line;
use crate::templates::{desktop_layout, NavTab};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub keyword: &'a str,
    pub listings: &'a [Listing],
    pub status: SearchStatus,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "木更津市 賃貸検索アプリ",
        NavTab::Listings,
        html! {
            h1 style="color: teal;" { "木更津市 賃貸データ分析ダッシュボード" }
            hr;

            // Enter in the field submits too.
            form action="/listings" method="get" style="display: flex; gap: 10px; justify-content: center;" {
                label for="q" class="sr-only" { "駅名や物件名で検索" }
                input
                    type="search"
                    id="q"
                    name="q"
                    value=(vm.keyword)
                    placeholder="駅名や物件名で検索（例: 木更津）"
                    style="width: 400px; padding: 8px;";
                button type="submit" { "検索" }
            }

            (status_line(&vm.status.message(), vm.status.is_error()))

            div class="scroll" {
                (listings_table(vm.listings))
            }
        },
    )
}

pub fn listings_table(listings: &[Listing]) -> Markup {
    html! {
        table id="listings" {
            thead {
                tr {
                    th { "物件名" }
                    th { "最寄駅" }
                    th { "家賃" }
                    th { "築年数" }
                    th { "間取り" }
                }
            }
            tbody {
                @for listing in listings {
                    @let cells = ListingCells::from(listing);
                    tr {
                        td { strong { (cells.name) } }
                        td { (cells.station) }
                        td class="price" { (cells.price) }
                        td class="num" { (cells.age) }
                        td { (cells.floor_plan) }
                    }
                }
            }
        }
    }
}
