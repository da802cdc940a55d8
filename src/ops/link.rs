use crate::model::post::Post;

/// URL of `post` on the site: `{site_url}/{locale}/{page}/{hashtag}/{post}`.
/// Missing page or hashtag slugs are skipped; a post without a slug has no URL.
pub fn share_url(site_url: &str, locale: &str, post: &Post) -> Option<String> {
    let slug = post.slug.as_deref().filter(|s| !s.trim().is_empty())?;
    let tags = post.tags.as_ref();

    let mut url = site_url.trim_end_matches('/').to_string();
    let segments = [
        Some(locale),
        tags.and_then(|t| t.page_slug.as_deref()),
        tags.and_then(|t| t.slug.as_deref()),
        Some(slug),
    ];
    for segment in segments.into_iter().flatten() {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::post::PostTags;

    fn post(slug: Option<&str>, tags: Option<PostTags>) -> Post {
        let mut post = Post::new("1", "text");
        post.slug = slug.map(str::to_string);
        post.tags = tags;
        post
    }

    #[test]
    fn full_path() {
        let tags = PostTags {
            primary: "#A".into(),
            slug: Some("hashtag".into()),
            page_slug: Some("page".into()),
            ..Default::default()
        };
        assert_eq!(
            share_url("https://site.test", "nl", &post(Some("p1"), Some(tags))).as_deref(),
            Some("https://site.test/nl/page/hashtag/p1")
        );
    }

    #[test]
    fn missing_segments_are_skipped() {
        assert_eq!(
            share_url("https://site.test/", "", &post(Some("p1"), None)).as_deref(),
            Some("https://site.test/p1")
        );
    }

    #[test]
    fn no_slug_no_url() {
        assert_eq!(share_url("https://site.test", "en", &post(None, None)), None);
        assert_eq!(share_url("https://site.test", "en", &post(Some(" "), None)), None);
    }
}
