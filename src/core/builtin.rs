//! Built-in article dictionary.
//!
//! Entries are listed in the order they were collected from the article
//! templates. Some source texts appear in more than one template section and
//! are listed again; [`TranslationTable::from_pairs`] keeps the first position
//! and the last key.
//!
//! [`TranslationTable::from_pairs`]: super::table::TranslationTable::from_pairs

pub const ARTICLE_TRANSLATIONS: &[(&str, &str)] = &[
    // edit.ejs
    ("แก้ไขบทความ", "editArticle"),
    ("ปรับปรุงเนื้อหาบทความของคุณ", "updateArticleContent"),
    ("กลับไปหน้าบทความ", "backToArticles"),
    ("แก้ไขเนื้อหา", "editContent"),
    ("อัปเดตข้อมูลบทความของคุณ", "updateArticleData"),
    ("ดูตัวอย่าง", "preview"),
    ("บันทึก", "save"),
    ("หัวข้อบทความ", "articleTitle"),
    ("สรุปเนื้อหา", "summary"),
    ("สรุปสั้นๆ ของบทความ...", "briefSummaryOfArticle"),
    ("เนื้อหาบทความ", "articleContent"),
    ("แท็ก", "tags"),
    ("แยกแท็กด้วยเครื่องหมายจุลภาค เช่น javascript, programming, tutorial", "separateTagsWithComma"),
    ("แยกแท็กด้วยเครื่องหมายจุลภาค", "separateTagsWithCommaShort"),
    ("การเผยแพร่", "publication"),
    ("สถานะ", "status"),
    ("ร่าง", "draft"),
    ("เผยแพร่", "published"),
    ("รอการอนุมัติ", "pending"),
    ("หมวดหมู่", "category"),
    ("เลือกหมวดหมู่", "selectCategory"),
    ("เทคโนโลยี", "technology"),
    ("ธุรกิจ", "business"),
    ("การจัดการ", "management"),
    ("การพัฒนา", "development"),
    ("ดีไซน์", "design"),
    ("การตลาด", "marketing"),
    ("การเงิน", "finance"),
    ("อื่นๆ", "other"),
    ("วันที่เผยแพร่", "publishDate"),
    ("รูปปก", "featuredImage"),
    ("ลบรูปภาพ", "removeImage"),
    ("อัปโหลดรูปใหม่", "uploadNewImage"),
    ("รองรับ JPG, PNG, GIF (สูงสุด 5MB)", "supportedImageFormats"),
    ("การตั้งค่า SEO", "seoSettings"),
    ("คำอธิบายสำหรับ SEO", "seoDescription"),
    ("คำอธิบายสำหรับเครื่องมือค้นหา...", "descriptionForSearchEngines"),
    ("ตัวอักษร", "characters"),
    ("จะใช้เป็น URL ของบทความ", "willBeUsedAsArticleURL"),
    ("สถิติ", "stats"),
    ("การดู", "views"),
    ("ไลค์", "likes"),
    ("ความคิดเห็น", "comments"),
    ("แก้ไขล่าสุด", "lastModified"),
    ("ลบบทความ", "deleteArticle"),
    ("ยกเลิก", "cancel"),
    ("บันทึกการแก้ไข", "saveChanges"),
    ("ดูตัวอย่างบทความ", "previewArticle"),
    ("เกิดข้อผิดพลาดในการอัปโหลดรูปภาพ", "errorUploadingImage"),
    ("คุณแน่ใจหรือไม่ที่จะยกเลิก? การเปลี่ยนแปลงที่ยังไม่ได้บันทึกจะหายไป", "confirmCancelUnsavedChanges"),
    ("ไม่พบบทความที่ต้องการแก้ไข", "articleNotFoundForEdit"),
    ("เกิดข้อผิดพลาดในการโหลดข้อมูล", "errorLoadingData"),
    ("บันทึกการแก้ไขเรียบร้อยแล้ว", "changesSavedSuccessfully"),
    ("เกิดข้อผิดพลาดในการบันทึก", "errorSaving"),
    ("คุณแน่ใจหรือไม่ที่จะลบบทความนี้? การกระทำนี้ไม่สามารถยกเลิกได้", "confirmDeleteArticle"),
    ("ลบบทความเรียบร้อยแล้ว", "articleDeletedSuccessfully"),
    ("เกิดข้อผิดพลาดในการลบ", "errorDeleting"),
    ("บันทึกอัตโนมัติ", "autoSaved"),
    ("นาที", "minutes"),

    // detail.ejs
    ("ไม่พบบทความที่ต้องการ", "articleNotFound"),
    ("เกิดข้อผิดพลาดในการโหลดบทความ", "errorLoadingArticle"),
    ("เผยแพร่แล้ว", "publishedStatus"),
    ("ถูกใจ", "like"),
    ("แชร์", "share"),
    ("บันทึกบทความ", "saveArticle"),
    ("เกี่ยวกับผู้เขียน", "aboutAuthor"),
    ("บทความ: ", "articlesCount"),
    ("ผู้ติดตาม: ", "followersCount"),
    ("ติดตาม", "follow"),
    ("เรียงตาม: ใหม่ที่สุด", "sortByNewest"),
    ("แสดงความคิดเห็น...", "leaveComment"),
    ("ส่งความคิดเห็น", "submitComment"),
    ("โหลดความคิดเห็นเพิ่มเติม", "loadMoreComments"),
    ("สารบัญ", "tableOfContents"),
    ("ไม่มีหัวข้อ", "noHeadings"),
    ("บทความที่เกี่ยวข้อง", "relatedArticles"),
    ("ไม่มีบทความที่เกี่ยวข้อง", "noRelatedArticles"),
    ("แท็กยอดนิยม", "popularTags"),
    ("ไม่มีแท็กยอดนิยม", "noPopularTags"),
    ("แชร์บทความ", "shareArticle"),
    ("แชร์ไปยัง Facebook", "shareToFacebook"),
    ("แชร์ไปยัง Twitter", "shareToTwitter"),
    ("แชร์ไปยัง LINE", "shareToLine"),
    ("คัดลอก", "copy"),
    ("คัดลอกลิงก์เรียบร้อยแล้ว", "linkCopiedSuccessfully"),
    ("ยังไม่มีความคิดเห็น เป็นคนแรกที่แสดงความคิดเห็น!", "noCommentsBeFirst"),
    ("ตอบกลับ", "reply"),
    ("แก้ไข", "edit"),
    ("ลบ", "delete"),
    ("เพิ่มความคิดเห็นเรียบร้อยแล้ว", "commentAddedSuccessfully"),
    ("เกิดข้อผิดพลาดในการส่งความคิดเห็น", "errorSubmittingComment"),
    ("เพิ่มในรายการถูกใจแล้ว", "addedToLikes"),
    ("ยกเลิกการถูกใจแล้ว", "unliked"),
    ("บันทึกบทความแล้ว", "articleSaved"),
    ("ยกเลิกการบันทึกแล้ว", "articleUnsaved"),
    ("ติดตามผู้เขียนแล้ว", "authorFollowed"),
    ("ยกเลิกการติดตามแล้ว", "authorUnfollowed"),
    ("กำลังติดตาม", "following"),
    ("ไม่มีแท็ก", "noTags"),
    ("ยังไม่มีข้อมูลประวัติ", "noBioAvailable"),
    ("เกิดข้อผิดพลาด", "errorOccurred"),

    // index.ejs
    ("ศูนย์รวมความรู้และประสบการณ์จากผู้เชี่ยวชาญ", "knowledgeSharingHub"),
    ("เขียนบทความใหม่", "writeNewArticle"),
    ("บทความทั้งหมด", "allArticles"),
    ("การดูทั้งหมด", "totalViews"),
    ("ยอดไลค์ทั้งหมด", "totalLikes"),
    ("ค้นหาบทความ...", "searchArticles"),
    ("หมวดหมู่ทั้งหมด", "allCategories"),
    ("ล่าสุด", "latest"),
    ("ยอดนิยม", "popular"),
    ("ดูมากที่สุด", "mostViewed"),
    ("ไลค์มากที่สุด", "mostLiked"),
    ("เก่าที่สุด", "oldest"),
    ("สถานะทั้งหมด", "allStatuses"),
    ("เผยแพร่แล้ว", "publishedStatus"),
    ("มุมมอง Grid", "gridView"),
    ("มุมมอง List", "listView"),
    ("แสดง ", "showing"),
    (" บทความ", "articlesText"),
    ("เกิดข้อผิดพลาดในการโหลดข้อมูล", "errorLoadingData"),
    ("คุณแน่ใจหรือไม่ที่จะลบบทความนี้?", "confirmDeleteThisArticle"),
    ("บันทึกบทความเรียบร้อยแล้ว", "articleSavedSuccessfully"),
    ("เกิดข้อผิดพลาดในการบันทึก", "errorSaving"),
    ("เลือกหมวดหมู่", "selectCategory"),
    ("สรุปเนื้อหา", "summary"),
    ("สรุปสั้นๆ ของบทความ...", "briefSummaryOfArticle"),
    ("เนื้อหาบทความ", "articleContent"),
    ("บันทึกเป็นร่าง", "saveAsDraft"),
    ("เผยแพร่ทันที", "publishNow"),

    // create.ejs
    ("ไทย (Thai)", "thai"),
];
